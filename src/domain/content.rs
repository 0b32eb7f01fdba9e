// ==========================================
// 作品集内容管理 - 页面内容领域模型
// ==========================================
// 职责: 页面内容 JSON 结构 + 内置默认内容
// 存储: site_content 表（key → JSON 文本）
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ==========================================
// ContentKey - 页面内容键
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContentKey {
    /// 首页履历（简介 / 技能 / 时间线）
    Career,
    /// 关于页（简介 / 事实 / 兴趣）
    AboutPage,
    /// 倡议页
    Initiatives,
}

impl ContentKey {
    /// 数据库中使用的键
    pub fn as_db_key(&self) -> &'static str {
        match self {
            ContentKey::Career => "career",
            ContentKey::AboutPage => "about-page",
            ContentKey::Initiatives => "initiatives",
        }
    }
}

impl fmt::Display for ContentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_db_key())
    }
}

impl FromStr for ContentKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "career" | "about" => Ok(ContentKey::Career),
            "about-page" => Ok(ContentKey::AboutPage),
            "initiatives" => Ok(ContentKey::Initiatives),
            other => Err(format!("unknown content key: {}", other)),
        }
    }
}

// ==========================================
// CareerContent - 履历内容
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEntry {
    pub date: String,
    pub role: String,
    pub company: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerContent {
    pub bio_paragraphs: Vec<String>,
    pub skills: Vec<String>,
    pub timeline: Vec<TimelineEntry>,
}

// ==========================================
// AboutPageContent - 关于页内容
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutFact {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutPageContent {
    pub bio_paragraphs: Vec<String>,
    pub facts: Vec<AboutFact>,
    pub interests: Vec<String>,
}

// ==========================================
// Initiative - 倡议条目（倡议页内容为其列表）
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Initiative {
    pub number: String,
    pub title: String,
    pub tag: String,
    pub description: String,
    pub outcome: String,
}

pub type InitiativesContent = Vec<Initiative>;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

// ==========================================
// 内置默认内容（库中无记录或记录损坏时使用）
// ==========================================

impl Default for CareerContent {
    fn default() -> Self {
        Self {
            bio_paragraphs: strings(&[
                "I am a Civil and Structural Design Engineer specialising in railway bridge design and assessment. I work across a range of challenging infrastructure projects for Network Rail, from masonry arch reconstruction to steel deck bridge repair.",
                "My career began in March 2018 as a Trainee Engineer, gaining hands-on experience in bridge inspection, site survey, and structural assessment. I progressed to Assistant Engineer in October 2022, was promoted to Design Engineer in August 2023, and to Senior Design Engineer in April 2025.",
                "Currently, I am the designer for the reconstruction of Marle Pit Hill Bridge on the Midland Main Line Electrification scheme, a two-span masonry arch being replaced with a continuous integral concrete deck.",
            ]),
            skills: strings(&[
                "Structural Analysis",
                "Bridge Design",
                "Masonry Arch Structures",
                "Steel Bridge Design",
                "Concrete Deck Design",
                "GRP Structures",
                "Cast Iron Assessment",
                "Foundation Design",
                "3D Frame Analysis",
                "Load Derivation",
                "Site Inspection",
                "Laser Scanning",
                "Optioneering",
                "Client Engagement",
                "Network Rail Standards",
                "Eurocodes",
                "AutoCAD",
            ]),
            timeline: vec![
                TimelineEntry {
                    date: "Apr 2025 – Present".to_string(),
                    role: "Senior Design Engineer".to_string(),
                    company: "AmcoGiffen".to_string(),
                    description: "Structural design delivery on Network Rail bridge and infrastructure projects.".to_string(),
                },
                TimelineEntry {
                    date: "Aug 2023 – Apr 2025".to_string(),
                    role: "Design Engineer".to_string(),
                    company: "AmcoGiffen".to_string(),
                    description: "Leading structural design on Network Rail bridge reconstruction projects.".to_string(),
                },
                TimelineEntry {
                    date: "Oct 2022 – Aug 2023".to_string(),
                    role: "Assistant Engineer".to_string(),
                    company: "AmcoGiffen".to_string(),
                    description: "Design of bridge decks, temporary works, and GRP stair structures.".to_string(),
                },
                TimelineEntry {
                    date: "Mar 2018 – Oct 2022".to_string(),
                    role: "Trainee Engineer".to_string(),
                    company: "AmcoGiffen".to_string(),
                    description: "Railway bridge assessment and repair, site inspection, and laser scanning.".to_string(),
                },
            ],
        }
    }
}

impl Default for AboutPageContent {
    fn default() -> Self {
        let fact = |label: &str, value: &str| AboutFact {
            label: label.to_string(),
            value: value.to_string(),
        };
        Self {
            bio_paragraphs: strings(&[
                "I am a Senior Civil and Structural Design Engineer based in the UK, specialising in railway bridge infrastructure.",
                "Outside of engineering, I am driven by a broader interest in how organisations work and how technology can be applied to real-world problems.",
            ]),
            facts: vec![
                fact("Based in", "United Kingdom"),
                fact("Employer", "AmcoGiffen"),
                fact("Specialisation", "Railway Bridge Design"),
                fact("Chartered status", "Working towards CEng"),
                fact("Career start", "March 2018"),
            ],
            interests: strings(&[
                "Structural Engineering",
                "Process Improvement",
                "AI & Technology",
                "Business Development",
                "Mentoring",
                "Surveying",
                "Laser Scanning",
            ]),
        }
    }
}

/// 倡议页默认内容
pub fn default_initiatives() -> InitiativesContent {
    vec![
        Initiative {
            number: "01".to_string(),
            title: "Design Team Project Database".to_string(),
            tag: "Efficiency & Knowledge".to_string(),
            description: "A searchable internal database of completed projects, capturing key project data, design approaches, and lessons learned.".to_string(),
            outcome: "Adopted across the design team, reducing duplicated research effort.".to_string(),
        },
        Initiative {
            number: "02".to_string(),
            title: "Surveying Team Business Plan".to_string(),
            tag: "Strategy & Business Development".to_string(),
            description: "A business plan for an in-house surveying capability covering market opportunity, resources, financial projections, and an implementation roadmap.".to_string(),
            outcome: "Reviewed at senior level and implemented by the business.".to_string(),
        },
        Initiative {
            number: "03".to_string(),
            title: "AI Deployment Programme".to_string(),
            tag: "Innovation & Technology".to_string(),
            description: "Evaluation of AI tools and practical workflows for report drafting, document summarisation, and code assistance.".to_string(),
            outcome: "Delivered AI workflows and guidance across the engineering team.".to_string(),
        },
    ]
}
