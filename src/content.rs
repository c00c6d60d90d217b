//! Static page content: profile details, projects and skills.

pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";
pub const FAVICON: &str = "/favicon.svg";

pub struct Profile {
    pub name: &'static str,
    pub brand: &'static str,
    pub image: &'static str,
    pub email: &'static str,
    pub github_url: &'static str,
    pub github_handle: &'static str,
    pub linkedin_url: &'static str,
    pub linkedin_handle: &'static str,
    pub resume_path: &'static str,
    pub resume_file_name: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Satyam Pawar",
    brand: "DevPortfolio",
    image: "https://media.licdn.com/dms/image/v2/D4D03AQEHPguMQ_dOIg/profile-displayphoto-shrink_800_800/profile-displayphoto-shrink_800_800/0/1724633867734?e=1753315200&v=beta&t=BVSLZ466isLSdW4UCusmS8nYinP3D35rOdNLIAudpk8",
    email: "satyampawar0070@gmail.com",
    github_url: "https://github.com/felixxplore",
    github_handle: "github.com/felixxplore",
    linkedin_url: "https://www.linkedin.com/in/satyam-pawar-93a800218",
    linkedin_handle: "linkedin.com/in/satyampawar",
    resume_path: "/resume.pdf",
    resume_file_name: "Satyam_Pawar_Resume.pdf",
};

impl Profile {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

pub struct Project {
    pub title: &'static str,
    pub description: &'static [&'static str],
    pub technologies: &'static [&'static str],
    pub images: &'static [&'static str],
    pub github: &'static str,
    pub demo: &'static str,
}

impl Project {
    /// First screenshot, or a placeholder for projects without one.
    pub fn cover_image(&self) -> &'static str {
        self.images.first().copied().unwrap_or(PLACEHOLDER_IMAGE)
    }
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Library Management System",
        description: &[
            "Built a console-based Library Management System using core Java.",
            "Key features include user authentication.",
            "Supports book borrowing and returning.",
            "Includes a reservation queue for books.",
            "Implements overdue fine calculation at $0.50/day after 7 days.",
            "Utilized ConcurrentHashMap for thread-safe data storage.",
            "Used ExecutorService for multithreading to handle concurrent operations.",
            "Implemented serialization for data persistence to save and load library data.",
        ],
        technologies: &["Multithreading", "File Handling", "Collection", "Core Java", "OOPs"],
        images: &["https://media.licdn.com/dms/image/sync/v2/D4D27AQF_auUfj2PdQQ/articleshare-shrink_800/B4DZbIiLCMGYAU-/0/1747121124495?e=1748181600&v=beta&t=zhQeomyq2oY8SowFE65FWkETzC3Ifgu01K7pTHFz2DI"],
        github: "https://github.com/felixxplore/LIbrary-Management-System",
        demo: "https://github.com/felixxplore/LIbrary-Management-System",
    },
    Project {
        title: "Quizify - Quiz Web Application",
        description: &[
            "Developed Quizify, a full-stack quiz application to enhance learning through interactive quizzes.",
            "Built frontend with React and TypeScript for a dynamic user interface.",
            "Implemented backend with Spring Boot and Java for a robust and scalable architecture.",
            "Focused on RESTful API design for seamless frontend-backend communication.",
            "Showcased skills in building scalable, user-friendly web applications.",
        ],
        technologies: &["React", "TypeScript", "Spring Boot", "Java", "MySQL", "JWT", "REST API"],
        images: &["https://media.licdn.com/dms/image/v2/D4D2DAQEikX5byyaSFQ/profile-treasury-image-shrink_800_800/B4DZbjQ4FIIAAY-/0/1747569576233?e=1748185200&v=beta&t=Dgm5bbGYursoB7_WkdotcSkvl9YqzYOqx6gwx0Gmi8g"],
        github: "https://github.com/felixxplore/Quiz-Application",
        demo: "https://quiz-application-arkc.vercel.app/",
    },
    Project {
        title: "GymSarthi - Gym Management System",
        description: &[
            "Gymsarthi simplifies gym operations with a centralized platform for administrators, trainers, and members.",
            "Admins can manage trainers, members, plans, and analytics.",
            "Trainers can assign tasks and view schedules.",
            "Members can book classes, track payments, and access personalized workout/diet plans.",
            "Built with modern web technologies, including real-time chat, QR code-based attendance, and data visualization.",
            "A robust solution for gym owners.",
            "Deployed and accessible online.",
            "Showcases full-stack development using the MERN stack.",
        ],
        technologies: &[
            "Node.js",
            "MongoDB",
            "JavaScript",
            "React.js",
            "Redux Toolkit",
            "REST API",
            "Express.js",
        ],
        images: &["https://media.licdn.com/dms/image/v2/D4D2DAQGLGi_nrKj4wg/profile-treasury-image-shrink_800_800/B4DZbIh4ErHAAc-/0/1747121048474?e=1748185200&v=beta&t=0-IFrGClGDPIVTIFDW2WVKC3RHrJa74NJbV4gQ4Tgps"],
        github: "https://github.com/felixxplore/GymSarthi",
        demo: "https://gym-sarthi-frontend.vercel.app/",
    },
];

pub struct Skill {
    pub name: &'static str,
    pub icon: &'static str,
}

pub const SKILLS: &[Skill] = &[
    Skill { name: "React", icon: "https://cdn.jsdelivr.net/npm/simple-icons@v13/icons/react.svg" },
    Skill { name: "TypeScript", icon: "https://cdn.jsdelivr.net/npm/simple-icons@v13/icons/typescript.svg" },
    Skill { name: "Java", icon: "https://cdn.jsdelivr.net/npm/@programming-languages-logos/java@0.0.0/java.png" },
    Skill { name: "Spring Boot", icon: "https://cdn.jsdelivr.net/npm/simple-icons@v13/icons/spring.svg" },
    Skill { name: "MySQL", icon: "https://cdn.jsdelivr.net/npm/simple-icons@v13/icons/mysql.svg" },
    Skill { name: "Git", icon: "https://cdn.jsdelivr.net/npm/simple-icons@v13/icons/git.svg" },
    Skill { name: "REST API", icon: "https://cdn.jsdelivr.net/npm/simple-icons@v13/icons/postman.svg" },
    Skill { name: "HTML/CSS", icon: "https://cdn.jsdelivr.net/npm/simple-icons@v13/icons/html5.svg" },
    Skill { name: "Tailwind CSS", icon: "https://cdn.jsdelivr.net/npm/simple-icons@v13/icons/tailwindcss.svg" },
    Skill { name: "Node.js", icon: "https://cdn.jsdelivr.net/npm/simple-icons@v13/icons/nodedotjs.svg" },
];

pub const SOFT_SKILLS: &[&str] = &[
    "Problem Solving",
    "Time Management",
    "Communication",
    "Teamwork",
    "Adaptability",
    "Critical Thinking",
    "Attention to Detail",
    "Creativity",
];

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn test_linked_assets_are_served() {
        let public = Path::new(env!("CARGO_MANIFEST_DIR")).join("public");
        for asset in [PLACEHOLDER_IMAGE, FAVICON, PROFILE.resume_path] {
            let file = public.join(asset.trim_start_matches('/'));
            assert!(file.is_file(), "missing {}", file.display());
        }
    }

    #[test]
    fn test_cover_image_fallback() {
        let bare = Project {
            title: "bare",
            description: &[],
            technologies: &[],
            images: &[],
            github: "",
            demo: "",
        };
        assert_eq!(bare.cover_image(), PLACEHOLDER_IMAGE);
        assert!(PROJECTS[0].cover_image().starts_with("https://"));
    }

    #[test]
    fn test_content_is_populated() {
        assert!(PROJECTS.iter().all(|p| !p.description.is_empty()));
        assert!(PROJECTS.iter().all(|p| !p.technologies.is_empty()));
        assert_eq!(SKILLS.len(), 10);
        assert_eq!(SOFT_SKILLS.len(), 8);
        assert_eq!(PROFILE.mailto(), "mailto:satyampawar0070@gmail.com");
    }
}
