//! Seed catalog data, compiled into the application and read-only at
//! runtime. Declaration order is the canonical record order.

use chrono::{DateTime, TimeZone, Utc};
use ds_core::models::{
    JobListing, JobStatus, Owner, Project, ProjectLinks, SeedComment, Timeline,
};
use once_cell::sync::Lazy;

/// Sentinel tech filter value that matches every project.
pub const ALL_TECH: &str = "All";

/// Canonical tech filter list, sentinel first.
pub static TECH_FILTERS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        ALL_TECH, "React", "Vue", "Angular", "Node.js", "Python", "Java", "Ruby", "PHP", "Swift",
        "Kotlin", "TypeScript", "C#", "Go", "Rust",
    ]
});

fn day(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

fn owner(name: &str, avatar: &str) -> Owner {
    Owner {
        name: name.to_string(),
        avatar: avatar.to_string(),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub static PROJECTS: Lazy<Vec<Project>> = Lazy::new(|| {
    vec![
        Project {
            id: 1,
            title: "Personal Finance Tracker".to_string(),
            short_description: "A comprehensive app for tracking expenses, budgeting, and financial planning with beautiful visualizations.".to_string(),
            description: "A comprehensive personal finance tracking application designed to help users manage their finances effectively.".to_string(),
            timeline: Timeline::Freeform("Oct 2022 - Jan 2023".to_string()),
            tech_stack: strings(&["React", "TypeScript", "TailwindCSS", "Chart.js", "Firebase"]),
            problem_solved: "Many people struggle to keep track of their expenses and budgets effectively. This application solves that with an intuitive interface and powerful analytics.".to_string(),
            features: strings(&[
                "Expense tracking with categories and tags",
                "Monthly budget planning and alerts",
                "Financial goal setting and progress tracking",
                "Data visualization with interactive charts",
            ]),
            development_challenges: "The main challenge was creating a secure system for storing financial data while maintaining performance.".to_string(),
            image_urls: strings(&[
                "https://images.example.com/finance-1.jpg",
                "https://images.example.com/finance-2.jpg",
                "https://images.example.com/finance-3.jpg",
            ]),
            video_url: None,
            links: ProjectLinks {
                live: "https://financetracker.example.com".to_string(),
                github: Some("https://github.com/username/finance-tracker".to_string()),
                twitter: None,
            },
            owner: owner("Eric Chen", "https://images.example.com/avatars/eric.jpg"),
            rating: 4.7,
            created_at: day(2023, 1, 15),
            team_work: false,
            comments: vec![
                SeedComment {
                    id: 1,
                    author: owner("Olivia Martinez", "https://images.example.com/avatars/olivia.jpg"),
                    text: "This looks amazing! Does it support importing data from CSV files?".to_string(),
                    date: "2 days ago".to_string(),
                    replies: vec![SeedComment {
                        id: 2,
                        author: owner("Eric Chen", "https://images.example.com/avatars/eric.jpg"),
                        text: "Yes! It supports CSV imports from most major banks.".to_string(),
                        date: "1 day ago".to_string(),
                        replies: vec![],
                    }],
                },
                SeedComment {
                    id: 3,
                    author: owner("James Wilson", "https://images.example.com/avatars/james.jpg"),
                    text: "The UI looks clean and intuitive. What did you use for the visualizations?".to_string(),
                    date: "3 days ago".to_string(),
                    replies: vec![],
                },
            ],
        },
        Project {
            id: 2,
            title: "Weather Forecast App".to_string(),
            short_description: "A sleek weather application with hourly and 7-day forecasts, utilizing multiple APIs for accurate data.".to_string(),
            description: "A modern weather application that provides accurate forecasts with a beautiful user interface.".to_string(),
            timeline: Timeline::Freeform("Jul 2022 - Sep 2022".to_string()),
            tech_stack: strings(&["Node.js", "Express", "React", "OpenWeather API"]),
            problem_solved: "Many weather apps have cluttered interfaces. This app simplifies the experience while providing all necessary information at a glance.".to_string(),
            features: strings(&[
                "Real-time weather updates",
                "Hourly and 7-day forecasts",
                "Location-based weather data",
                "Severe weather alerts",
            ]),
            development_challenges: "Integrating multiple weather APIs and creating a seamless experience across devices was challenging.".to_string(),
            image_urls: strings(&[
                "https://images.example.com/weather-1.jpg",
                "https://images.example.com/weather-2.jpg",
                "https://images.example.com/weather-3.jpg",
            ]),
            video_url: None,
            links: ProjectLinks {
                live: "https://weatherapp.example.com".to_string(),
                github: Some("https://github.com/username/weather-app".to_string()),
                twitter: None,
            },
            owner: owner("Maya Kim", "https://images.example.com/avatars/maya.jpg"),
            rating: 4.9,
            created_at: day(2022, 9, 10),
            team_work: false,
            comments: vec![SeedComment {
                id: 4,
                author: owner("David Lee", "https://images.example.com/avatars/david.jpg"),
                text: "So much better than the default weather app! The hourly forecast is particularly useful.".to_string(),
                date: "1 week ago".to_string(),
                replies: vec![],
            }],
        },
        Project {
            id: 3,
            title: "Team Collaboration Tool".to_string(),
            short_description: "A real-time collaboration platform for teams with task management, file sharing, and communication.".to_string(),
            description: "A comprehensive platform that enables seamless communication and collaboration for remote teams.".to_string(),
            timeline: Timeline::Freeform("Feb 2022 - Jun 2022".to_string()),
            tech_stack: strings(&["Vue", "Vuex", "Firebase", "Socket.io"]),
            problem_solved: "Remote teams struggle with scattered communication across multiple platforms. This tool centralizes everything in one place.".to_string(),
            features: strings(&[
                "Real-time messaging and video calls",
                "Task management with progress tracking",
                "Team calendar and scheduling",
                "File sharing and storage",
            ]),
            development_challenges: "Building the real-time collaboration features required careful architecture to ensure performance at scale.".to_string(),
            image_urls: strings(&[
                "https://images.example.com/collab-1.jpg",
                "https://images.example.com/collab-2.jpg",
                "https://images.example.com/collab-3.jpg",
            ]),
            video_url: None,
            links: ProjectLinks {
                live: "https://teamcollab.example.com".to_string(),
                github: Some("https://github.com/username/team-collab".to_string()),
                twitter: None,
            },
            owner: owner("Ryan Taylor", "https://images.example.com/avatars/ryan.jpg"),
            rating: 4.6,
            created_at: day(2022, 6, 15),
            team_work: true,
            comments: vec![SeedComment {
                id: 5,
                author: owner("Sarah Johnson", "https://images.example.com/avatars/sarah.jpg"),
                text: "We've started using this at our startup and it's been a game-changer for our remote team.".to_string(),
                date: "2 weeks ago".to_string(),
                replies: vec![],
            }],
        },
        Project {
            id: 4,
            title: "AI Image Generator".to_string(),
            short_description: "Generate unique images using AI and machine learning models with customizable parameters.".to_string(),
            description: "A cutting-edge application that leverages AI to generate unique images based on text prompts.".to_string(),
            timeline: Timeline::Freeform("Mar 2023 - Aug 2023".to_string()),
            tech_stack: strings(&["Python", "TensorFlow", "Flask", "React"]),
            problem_solved: "Creators often need unique visual assets but lack the skills or time to create them from scratch. This tool democratizes image creation through AI.".to_string(),
            features: strings(&[
                "Text-to-image generation",
                "Style transfer options",
                "Batch processing",
                "Export in multiple formats",
            ]),
            development_challenges: "Training the AI model required significant compute resources; the model was optimized for web deployment.".to_string(),
            image_urls: strings(&[
                "https://images.example.com/ai-1.jpg",
                "https://images.example.com/ai-2.jpg",
                "https://images.example.com/ai-3.jpg",
            ]),
            video_url: None,
            links: ProjectLinks {
                live: "https://ai-images.example.com".to_string(),
                github: Some("https://github.com/username/ai-image-generator".to_string()),
                twitter: None,
            },
            owner: owner("Sophia Williams", "https://images.example.com/avatars/sophia.jpg"),
            rating: 4.8,
            created_at: day(2023, 8, 20),
            team_work: true,
            comments: vec![SeedComment {
                id: 6,
                author: owner("Michael Brown", "https://images.example.com/avatars/michael.jpg"),
                text: "The quality of the generated images is incredible. What models did you use?".to_string(),
                date: "3 days ago".to_string(),
                replies: vec![],
            }],
        },
        Project {
            id: 5,
            title: "Code Review Platform".to_string(),
            short_description: "A platform for developers to review code, collaborate on problems, and learn from each other.".to_string(),
            description: "A specialized platform that helps developers improve their code quality through collaborative reviews.".to_string(),
            timeline: Timeline::Freeform("Jan 2023 - Apr 2023".to_string()),
            tech_stack: strings(&["Java", "Spring Boot", "PostgreSQL", "React"]),
            problem_solved: "Code reviews are essential for quality but often bottlenecked by process. This platform streamlines reviews for developers at all levels.".to_string(),
            features: strings(&[
                "Code snippet sharing and review",
                "Inline commenting and suggestions",
                "Version control integration",
                "Community challenges and exercises",
            ]),
            development_challenges: "Creating a code editor with syntax highlighting and inline comments required complex UI work.".to_string(),
            image_urls: strings(&[
                "https://images.example.com/review-1.jpg",
                "https://images.example.com/review-2.jpg",
                "https://images.example.com/review-3.jpg",
            ]),
            video_url: None,
            links: ProjectLinks {
                live: "https://codereview.example.com".to_string(),
                github: Some("https://github.com/username/code-review-platform".to_string()),
                twitter: None,
            },
            owner: owner("James Wilson", "https://images.example.com/avatars/james.jpg"),
            rating: 4.5,
            created_at: day(2023, 4, 5),
            team_work: false,
            comments: vec![SeedComment {
                id: 7,
                author: owner("Alex Morgan", "https://images.example.com/avatars/alex.jpg"),
                text: "Our code quality has improved significantly after a month of use.".to_string(),
                date: "1 month ago".to_string(),
                replies: vec![],
            }],
        },
        Project {
            id: 6,
            title: "E-learning Management System".to_string(),
            short_description: "A complete LMS with course creation, student management, and progress tracking.".to_string(),
            description: "A comprehensive learning management system for educational institutions and course creators.".to_string(),
            timeline: Timeline::Freeform("Nov 2022 - Feb 2023".to_string()),
            tech_stack: strings(&["PHP", "Laravel", "MySQL", "Vue"]),
            problem_solved: "Traditional education systems don't scale well for online learning. This platform provides all the tools needed for effective online education.".to_string(),
            features: strings(&[
                "Course creation and management",
                "Student enrollment and progress tracking",
                "Quiz and assignment tools",
                "Analytics dashboard for educators",
            ]),
            development_challenges: "Supporting various educational contexts required a highly modular architecture with a plugin system.".to_string(),
            image_urls: strings(&[
                "https://images.example.com/lms-1.jpg",
                "https://images.example.com/lms-2.jpg",
                "https://images.example.com/lms-3.jpg",
            ]),
            video_url: None,
            links: ProjectLinks {
                live: "https://elearning.example.com".to_string(),
                github: Some("https://github.com/username/elearning-platform".to_string()),
                twitter: None,
            },
            owner: owner("Emma Rodriguez", "https://images.example.com/avatars/emma.jpg"),
            rating: 4.7,
            created_at: day(2023, 2, 28),
            team_work: true,
            comments: vec![SeedComment {
                id: 8,
                author: owner("Robert Kim", "https://images.example.com/avatars/robert.jpg"),
                text: "The interface is much more intuitive than our previous system.".to_string(),
                date: "2 months ago".to_string(),
                replies: vec![],
            }],
        },
    ]
});

pub static JOB_LISTINGS: Lazy<Vec<JobListing>> = Lazy::new(|| {
    vec![
        JobListing {
            id: 1,
            title: "Senior React Developer".to_string(),
            company: "TechInnovate".to_string(),
            logo: "https://images.example.com/logos/techinnovate.png".to_string(),
            location: "San Francisco, CA".to_string(),
            remote: true,
            description: "We're looking for an experienced React developer to help build our next-generation web applications.".to_string(),
            requirements: strings(&[
                "5+ years of experience with React and modern JavaScript",
                "Experience with TypeScript and state management libraries",
                "Excellent communication and teamwork skills",
            ]),
            salary: Some("$120,000 - $150,000".to_string()),
            contact: "careers@techinnovate.example.com".to_string(),
            posted_at: day(2023, 9, 15),
            status: JobStatus::Open,
        },
        JobListing {
            id: 2,
            title: "Full Stack Developer".to_string(),
            company: "DataVision".to_string(),
            logo: "https://images.example.com/logos/datavision.png".to_string(),
            location: "Boston, MA".to_string(),
            remote: true,
            description: "Join our growing team to build data-driven applications that help businesses make better decisions.".to_string(),
            requirements: strings(&[
                "3+ years of experience with full stack development",
                "Proficiency in React, Node.js, and SQL/NoSQL databases",
                "Experience with cloud services",
            ]),
            salary: Some("$100,000 - $130,000".to_string()),
            contact: "jobs@datavision.example.com".to_string(),
            posted_at: day(2023, 10, 2),
            status: JobStatus::Interviewing,
        },
        JobListing {
            id: 3,
            title: "UI/UX Designer".to_string(),
            company: "CreativeWorks".to_string(),
            logo: "https://images.example.com/logos/creativeworks.png".to_string(),
            location: "New York, NY".to_string(),
            remote: false,
            description: "We're seeking a talented UI/UX designer to create beautiful, intuitive interfaces for our clients.".to_string(),
            requirements: strings(&[
                "Portfolio demonstrating strong UI/UX work",
                "Proficiency in Figma or similar tools",
                "Experience with design systems",
            ]),
            salary: Some("$90,000 - $120,000".to_string()),
            contact: "design@creativeworks.example.com".to_string(),
            posted_at: day(2023, 9, 28),
            status: JobStatus::Hired,
        },
        JobListing {
            id: 4,
            title: "Machine Learning Engineer".to_string(),
            company: "AI Solutions".to_string(),
            logo: "https://images.example.com/logos/aisolutions.png".to_string(),
            location: "Seattle, WA".to_string(),
            remote: true,
            description: "Help us build the next generation of AI-powered products, developing and deploying machine learning models.".to_string(),
            requirements: strings(&[
                "MS or PhD in Computer Science, AI, or related field",
                "Experience with TensorFlow or PyTorch",
                "Strong programming skills in Python",
            ]),
            salary: None,
            contact: "recruiting@aisolutions.example.com".to_string(),
            posted_at: day(2023, 10, 10),
            status: JobStatus::Confidential,
        },
        JobListing {
            id: 5,
            title: "DevOps Engineer".to_string(),
            company: "CloudTech".to_string(),
            logo: "https://images.example.com/logos/cloudtech.png".to_string(),
            location: "Austin, TX".to_string(),
            remote: true,
            description: "Join our infrastructure team to work on automation, CI/CD pipelines, and infrastructure as code.".to_string(),
            requirements: strings(&[
                "3+ years of experience in DevOps or SRE roles",
                "Proficiency with Kubernetes and Docker",
                "Experience with infrastructure as code",
            ]),
            salary: Some("$110,000 - $140,000".to_string()),
            contact: "jobs@cloudtech.example.com".to_string(),
            posted_at: day(2023, 9, 20),
            status: JobStatus::Open,
        },
    ]
});
