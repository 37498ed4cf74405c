//! Content tables for the portfolio.
//!
//! Everything the page renders lives here as one authoritative
//! configuration, built by [`PortfolioContent::standard`] and validated
//! before the page mounts. The records are serde-friendly plain structs;
//! nothing in this module knows how they are displayed.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::demo_link::parse_demo_link;
use crate::registry::{Section, SectionRegistry, section_id};

/// Rejected configuration.
///
/// Raised at startup, before anything mounts; the page never renders a
/// partially valid content table.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContentError {
    #[error("section registry is empty")]
    EmptyRegistry,
    #[error("duplicate section id `{0}`")]
    DuplicateSectionId(String),
    #[error("{record} entry has an empty {field}")]
    EmptyField {
        record: &'static str,
        field: &'static str,
    },
}

/// Card preview length before a description gets a "Show More" disclosure.
pub const PREVIEW_CHARS: usize = 120;

/// Char-boundary-safe preview of a long text block.
///
/// `None` when the text already fits in `max_chars` characters.
pub fn preview(text: &str, max_chars: usize) -> Option<String> {
    match text.char_indices().nth(max_chars) {
        None => None,
        Some((cut, _)) => Some(format!("{}...", &text[..cut])),
    }
}

/// Headline stat shown under the hero copy.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

/// Who the page is about.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    /// Role line under the name.
    pub headline: String,
    /// Caption revealed by the typewriter.
    pub caption: String,
    /// Hero paragraph.
    pub intro: String,
    /// Longer paragraph for the about section.
    pub summary: String,
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    /// Badge text above the name.
    pub availability: String,
    pub stats: Vec<Stat>,
}

impl Profile {
    /// Uppercase initials for the nav brand, e.g. "Sowmya Sri Pandi" -> "SSP".
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(|c| c.to_uppercase())
            .collect()
    }
}

/// One role in the experience timeline.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub title: String,
    pub company: String,
    pub location: String,
    pub period: String,
    pub achievements: Vec<String>,
}

/// One project card.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub github: String,
    /// Parsed demo link; `None` when the source entry was empty or a bare
    /// hosting root.
    pub demo: Option<String>,
}

impl Project {
    /// Build a project entry, classifying the raw demo URL as it comes in.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        tags: Vec<String>,
        github: impl Into<String>,
        raw_demo: &str,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            tags,
            github: github.into(),
            demo: parse_demo_link(raw_demo),
        }
    }

    /// Truncated description for the card, when the full text needs a
    /// "Show More" disclosure.
    pub fn short_description(&self) -> Option<String> {
        preview(&self.description, PREVIEW_CHARS)
    }
}

/// Icon identifiers the skills grid can reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillIcon {
    Brain,
    Code,
    Database,
    Network,
    Lightning,
}

/// One group in the skills grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub icon: SkillIcon,
    pub title: String,
    pub summary: String,
}

/// One degree in the education column.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub school: String,
    pub location: Option<String>,
    pub period: String,
}

/// One published paper.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Publication {
    pub title: String,
    pub summary: String,
    pub url: String,
}

/// Everything the page renders, plus the section registry that orders it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PortfolioContent {
    pub registry: SectionRegistry,
    pub profile: Profile,
    pub experiences: Vec<Experience>,
    pub projects: Vec<Project>,
    pub skills: Vec<SkillGroup>,
    pub education: Vec<Education>,
    pub certifications: Vec<String>,
    pub publications: Vec<Publication>,
}

impl PortfolioContent {
    /// The one authoritative content table.
    pub fn standard() -> Result<Self, ContentError> {
        let registry = SectionRegistry::new(vec![
            Section::new(section_id::HOME, "Home"),
            Section::new(section_id::ABOUT, "About"),
            Section::new(section_id::EXPERIENCE, "Experience"),
            Section::new(section_id::PROJECTS, "Projects"),
            Section::new(section_id::SKILLS, "Skills"),
            Section::new(section_id::EDUCATION, "Education"),
            Section::new(section_id::PUBLICATIONS, "Publications"),
            Section::new(section_id::CONTACT, "Contact"),
        ])?;

        let content = Self {
            registry,
            profile: standard_profile(),
            experiences: standard_experiences(),
            projects: standard_projects(),
            skills: standard_skills(),
            education: standard_education(),
            certifications: standard_certifications(),
            publications: standard_publications(),
        };
        content.validate()?;
        Ok(content)
    }

    /// Fail fast on malformed entries so the menu and the rendered sections
    /// can never fall out of correspondence.
    pub fn validate(&self) -> Result<(), ContentError> {
        fn require(
            ok: bool,
            record: &'static str,
            field: &'static str,
        ) -> Result<(), ContentError> {
            if ok {
                Ok(())
            } else {
                Err(ContentError::EmptyField { record, field })
            }
        }

        require(!self.profile.name.is_empty(), "profile", "name")?;
        require(!self.profile.email.is_empty(), "profile", "email")?;
        for stat in &self.profile.stats {
            require(!stat.value.is_empty(), "stat", "value")?;
            require(!stat.label.is_empty(), "stat", "label")?;
        }
        for experience in &self.experiences {
            require(!experience.title.is_empty(), "experience", "title")?;
            require(!experience.company.is_empty(), "experience", "company")?;
            for achievement in &experience.achievements {
                require(!achievement.is_empty(), "experience", "achievement")?;
            }
        }
        for project in &self.projects {
            require(!project.title.is_empty(), "project", "title")?;
            require(!project.description.is_empty(), "project", "description")?;
            for tag in &project.tags {
                require(!tag.is_empty(), "project", "tag")?;
            }
        }
        for group in &self.skills {
            require(!group.title.is_empty(), "skill group", "title")?;
            require(!group.summary.is_empty(), "skill group", "summary")?;
        }
        for entry in &self.education {
            require(!entry.degree.is_empty(), "education", "degree")?;
            require(!entry.school.is_empty(), "education", "school")?;
        }
        for certification in &self.certifications {
            require(!certification.is_empty(), "certification", "text")?;
        }
        for publication in &self.publications {
            require(!publication.title.is_empty(), "publication", "title")?;
            require(!publication.url.is_empty(), "publication", "url")?;
        }
        Ok(())
    }
}

fn standard_profile() -> Profile {
    Profile {
        name: "Sowmya Sri Pandi".into(),
        headline: "Generative AI Engineer".into(),
        caption: "Building the future with AI".into(),
        intro: "Specializing in LLM applications, RAG pipelines, and agentic workflows. \
                Transforming complex AI challenges into elegant, production-ready solutions."
            .into(),
        summary: "Generative AI Engineer with 3+ years of experience specializing in end-to-end \
                  development of LLM applications, including RAG pipelines, agentic workflows, \
                  and fine-tuning transformer-based architectures. Published IEEE author with a \
                  strong research foundation in classical machine learning and NLP, combined \
                  with backend engineering experience from Accenture. Proficient in optimizing \
                  model performance through vector search and compression, deploying scalable \
                  AI microservices using Docker across Azure and AWS, and implementing MLOps \
                  best practices to deliver production-grade, reliable, high-impact AI systems."
            .into(),
        email: "sowmyasrip4@gmail.com".into(),
        phone: "475-273-2991".into(),
        linkedin: "https://www.linkedin.com/in/sowmya-sri-pandi-220b872b5/".into(),
        availability: "Available for opportunities".into(),
        stats: vec![
            Stat {
                value: "3+".into(),
                label: "Years Experience".into(),
            },
            Stat {
                value: "5+".into(),
                label: "Projects".into(),
            },
            Stat {
                value: "1".into(),
                label: "IEEE Publication".into(),
            },
        ],
    }
}

fn standard_experiences() -> Vec<Experience> {
    vec![
        Experience {
            title: "Generative AI Engineer".into(),
            company: "Travelers".into(),
            location: "Hartford, CT, USA".into(),
            period: "May 2025 - Present".into(),
            achievements: vec![
                "Architected and deployed LLM-based applications for underwriting and claims workflows.".into(),
                "Built RAG pipelines using LangChain and Pinecone, improving retrieval accuracy by ~30%.".into(),
                "Designed prompt orchestration and agentic workflows, reducing manual processing time by ~40%.".into(),
                "Fine-tuned transformer models (BERT, T5) achieving up to 94% F1-score on 10K+ monthly documents.".into(),
                "Deployed scalable AI microservices using FastAPI and Docker across Azure and AWS with 99.9% uptime.".into(),
            ],
        },
        Experience {
            title: "Machine Learning Engineer".into(),
            company: "Crowe Global".into(),
            location: "Hartford, Connecticut, USA".into(),
            period: "Sep 2024 - Apr 2025".into(),
            achievements: vec![
                "Developed end-to-end ML pipelines using Python and Spark, reducing data preprocessing latency by 25%.".into(),
                "Built and optimized classification and forecasting models using PyTorch for audit automation use cases.".into(),
                "Implemented MLOps workflows with MLflow, shortening model deployment cycles by 2 weeks.".into(),
            ],
        },
        Experience {
            title: "Backend Developer (Data & ML Systems)".into(),
            company: "Barclays (Accenture)".into(),
            location: "Hyderabad, India".into(),
            period: "Mar 2022 - Dec 2023".into(),
            achievements: vec![
                "Built & maintained backend APIs using Python & Flask/FastAPI to support fraud detection & risk analytics workflows.".into(),
                "Developed automated ETL pipelines using SQL, PL/SQL, & Python to process large-scale banking & transactional data.".into(),
                "Integrated machine learning models into backend services, contributing to identification of $150k+ in potential fraud.".into(),
            ],
        },
    ]
}

fn standard_projects() -> Vec<Project> {
    vec![
        Project::new(
            "AI-Document-Summarizer",
            "A modern AI-powered web app that summarizes PDF, DOCX, and TXT documents in seconds. \
             Generate high-quality summaries with customizable length, live preview, detailed \
             statistics, and export results as DOCX through a clean, responsive interface.",
            vec![
                "React".into(),
                "Tailwind CSS".into(),
                "FastAPI".into(),
                "PyTorch".into(),
                "Hugging Face Transformers".into(),
            ],
            "https://github.com/sowmyasri-d9/AI-Document-Summarizer.git",
            "https://youtu.be/Q20RSiPCmik",
        ),
        Project::new(
            "Customer Churn Predictor",
            "Customer churn prediction focused on improving customer retention using machine \
             learning techniques. The system analyzes customer behavior and engagement data to \
             identify churn risk, leveraging models such as Decision Tree, Logistic Regression, \
             Random Forest, and SVM. SMOTE is used to handle class imbalance, with a responsive \
             React JS frontend and a FastAPI backend for efficient model serving and data \
             processing.",
            vec![
                "ML".into(),
                "FastAPI".into(),
                "React".into(),
                "Decision Tree".into(),
                "Logistic Regression".into(),
                "SVM".into(),
                "SMOTE".into(),
            ],
            "https://github.com/Mbicha/CustomerChurnPredictor.git",
            "https://youtu.be/Q20RSiPCmik",
        ),
        Project::new(
            "Detecting Cyber Bullying on Twitter using Support Vector Machine",
            "On the platform provided by social media, a significant number of young people are \
             subjected to bullying. Cyberbullying is becoming a more widespread problem with the \
             proliferation of social networking platforms. To discover word similarities in the \
             tweets that were written by bullies, utilize Machine Learning, and develop a ML \
             model that can do automatic identification of the bullying acts on different social \
             media websites or platforms. SVM is used in the classification process, whereas NLP \
             is utilized for the processing of the data. Additionally, in order to decide whether \
             or not a tweet constitutes bullying, the Twitter API is used to gather the tweets, \
             which are then loaded into a model.",
            vec![
                "SVM".into(),
                "Python".into(),
                "NLP".into(),
                "TF-IDF".into(),
            ],
            "https://github.com/sowmyasri-d9/DETECTING-CYBERBULLYING-TWEETS-USING-MACHINE-LEARNING.git",
            "https://youtube.com",
        ),
        Project::new(
            "Wedding Management System",
            "A comprehensive platform designed to simplify wedding planning by consolidating all \
             essential services in one place. Users can select their cultural preferences, choose \
             an event date, and book venues, catering services, DJs, decorators, and \
             photographers. The system also supports mock credit card payments and allows users \
             to print receipts for their bookings. It aims to streamline the entire wedding \
             planning process, making it efficient and hassle-free for both couples and wedding \
             planners.",
            vec![
                "React".into(),
                "Node.js".into(),
                "Express".into(),
                "MongoDB".into(),
            ],
            "https://github.com/sowmyasri-d9/wedding-management-.git",
            "https://youtube.com",
        ),
        Project::new(
            "DevLink - Developer Portfolio & Links Platform",
            "A developer resource hub where developers can; Share and categorize useful \
             resources (articles, videos, tools), Bookmark resources, Comment and rate \
             resources, and Search by tags, titles, and categories. DevLink aims to foster a \
             collaborative community for developers to discover and share valuable content, \
             enhancing their learning and productivity.",
            vec![
                "React".into(),
                "Node.js".into(),
                "Express".into(),
                "MongoDB".into(),
                "JWT".into(),
                "Tailwind CSS".into(),
            ],
            "https://github.com/sowmyasri-d9/Devlopers_resources.git",
            "https://youtube.com",
        ),
    ]
}

fn standard_skills() -> Vec<SkillGroup> {
    vec![
        SkillGroup {
            icon: SkillIcon::Brain,
            title: "Generative AI".into(),
            summary: "RAG, LangChain, LangGraph (Agents), Prompt Engineering, LoRA/QLoRA, RAGAS"
                .into(),
        },
        SkillGroup {
            icon: SkillIcon::Code,
            title: "ML & NLP".into(),
            summary: "PyTorch, TensorFlow, Hugging Face Transformers (BERT, GPT, T5), \
                      Scikit-learn, XGBoost"
                .into(),
        },
        SkillGroup {
            icon: SkillIcon::Database,
            title: "Data & Vector Infrastructure".into(),
            summary: "Pinecone, FAISS, Milvus, PostgreSQL, MongoDB, ETL Pipelines".into(),
        },
        SkillGroup {
            icon: SkillIcon::Network,
            title: "MLOps & Deployment".into(),
            summary: "Docker, Kubernetes, MLflow, CI/CD".into(),
        },
        SkillGroup {
            icon: SkillIcon::Lightning,
            title: "Cloud Platforms".into(),
            summary: "Azure AI, AWS (SageMaker, Lambda), GCP".into(),
        },
        SkillGroup {
            icon: SkillIcon::Code,
            title: "Backend Engineering".into(),
            summary: "Python, FastAPI, Flask, Django, REST APIs, Microservices Architecture"
                .into(),
        },
    ]
}

fn standard_education() -> Vec<Education> {
    vec![
        Education {
            degree: "Master's in Computer Science".into(),
            school: "Sacred Heart University".into(),
            location: Some("CT, USA".into()),
            period: "Jan 2024 - Mar 2025".into(),
        },
        Education {
            degree: "B. Tech in Computer Science".into(),
            school: "PVP Siddhartha Institute of Technology".into(),
            location: None,
            period: "Aug 2019 - May 2023".into(),
        },
    ]
}

fn standard_certifications() -> Vec<String> {
    vec![
        "Generative AI Engineer - IBM".into(),
        "Machine Learning Engineer – AWS".into(),
        "Azure AI Engineer - Microsoft".into(),
        "Back-End developer professional – Meta".into(),
        "Python Programming - Coursera".into(),
        "Data Structures and Algorithms Using Python – NPTEL (Silver badge)".into(),
    ]
}

fn standard_publications() -> Vec<Publication> {
    vec![Publication {
        title: "Detecting Cyber Bullying on Twitter using Support Vector Machine".into(),
        summary: "IEEE Conference Publication - Applied TF-IDF, text preprocessing, and SVM for \
                  Twitter-based NLP classification."
            .into(),
        url: "https://ieeexplore.ieee.org/document/10073658".into(),
    }]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn standard_content_is_valid() {
        let content = PortfolioContent::standard().unwrap();
        assert_eq!(content.registry.len(), 8);
        assert_eq!(content.registry.first().id, section_id::HOME);
        assert_eq!(content.experiences.len(), 3);
        assert_eq!(content.projects.len(), 5);
        assert_eq!(content.skills.len(), 6);
        assert_eq!(content.publications.len(), 1);
    }

    #[test]
    fn standard_demo_links_follow_the_rule() {
        let content = PortfolioContent::standard().unwrap();
        let demos: Vec<bool> = content
            .projects
            .iter()
            .map(|project| project.demo.is_some())
            .collect();
        // Two recorded demos, three placeholders pointing at the bare root.
        assert_eq!(demos, vec![true, true, false, false, false]);
    }

    #[test]
    fn validation_rejects_empty_experience_title() {
        let mut content = PortfolioContent::standard().unwrap();
        content.experiences[0].title.clear();
        assert_eq!(
            content.validate(),
            Err(ContentError::EmptyField {
                record: "experience",
                field: "title",
            })
        );
    }

    #[test]
    fn validation_rejects_empty_project_tag() {
        let mut content = PortfolioContent::standard().unwrap();
        content.projects[0].tags.push(String::new());
        assert_eq!(
            content.validate(),
            Err(ContentError::EmptyField {
                record: "project",
                field: "tag",
            })
        );
    }

    #[test]
    fn validation_rejects_publication_without_url() {
        let mut content = PortfolioContent::standard().unwrap();
        content.publications[0].url.clear();
        assert_eq!(
            content.validate(),
            Err(ContentError::EmptyField {
                record: "publication",
                field: "url",
            })
        );
    }

    #[test]
    fn profile_initials() {
        let content = PortfolioContent::standard().unwrap();
        assert_eq!(content.profile.initials(), "SSP");
    }

    #[test]
    fn preview_returns_none_when_text_fits() {
        assert_eq!(preview("short", 120), None);
        let exactly = "x".repeat(120);
        assert_eq!(preview(&exactly, 120), None);
    }

    #[test]
    fn preview_truncates_on_char_boundary() {
        let text = "é".repeat(130);
        let cut = preview(&text, 120).unwrap();
        assert!(cut.ends_with("..."));
        assert_eq!(cut.chars().count(), 123);
    }

    #[test]
    fn long_project_descriptions_get_a_disclosure() {
        let content = PortfolioContent::standard().unwrap();
        for project in &content.projects {
            let needs_disclosure = project.description.chars().count() > PREVIEW_CHARS;
            assert_eq!(project.short_description().is_some(), needs_disclosure);
        }
    }

    #[test]
    fn content_round_trips_through_json() {
        let content = PortfolioContent::standard().unwrap();
        let json = serde_json::to_string(&content).unwrap();
        let back: PortfolioContent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, content);
    }
}
