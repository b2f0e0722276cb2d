#[cfg(feature = "ssr")]
mod api;
#[cfg(feature = "ssr")]
mod config;

#[cfg(feature = "ssr")]
pub use api::*;
#[cfg(feature = "ssr")]
pub use config::*;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a listed item. The mock dataset numbers items, the
/// backend issues UUID strings, so both are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Number(i64),
    Text(String),
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Number(n) => write!(f, "{n}"),
            ItemId::Text(s) => f.write_str(s),
        }
    }
}

/// Wire wrapper returned by every backend endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub location: String,
    pub phone: String,
    pub email: String,
    pub github: String,
    pub linkedin: String,
    pub website: String,
    pub summary: String,
}

/// Outgoing profile write. Fields left as `None` are omitted from the body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl From<Profile> for ProfileUpdate {
    fn from(profile: Profile) -> Self {
        Self {
            name: Some(profile.name),
            title: Some(profile.title),
            location: Some(profile.location),
            phone: Some(profile.phone),
            email: Some(profile.email),
            github: Some(profile.github),
            linkedin: Some(profile.linkedin),
            website: Some(profile.website),
            summary: Some(profile.summary),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub institution: String,
    pub degree: String,
    pub duration: String,
    pub grade: String,
}

/// Skill names grouped under the fixed set of categories the site shows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skills {
    #[serde(default)]
    pub programming: Vec<String>,
    #[serde(default)]
    pub web_dev: Vec<String>,
    #[serde(default)]
    pub tools: Vec<String>,
    #[serde(default)]
    pub cad: Vec<String>,
    #[serde(default)]
    pub concepts: Vec<String>,
}

impl Skills {
    /// Display label and items for each category, in page order.
    pub fn categories(&self) -> [(&'static str, &[String]); 5] {
        [
            ("Programming Languages", self.programming.as_slice()),
            ("Web Development", self.web_dev.as_slice()),
            ("Tools & Platforms", self.tools.as_slice()),
            ("CAD & Simulation", self.cad.as_slice()),
            ("Core Concepts", self.concepts.as_slice()),
        ]
    }
}

/// Project category. Names without a filter button are kept as sent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProjectType {
    Robotics,
    Software,
    Game,
    Web,
    Cad,
    Research,
    Other(String),
}

impl ProjectType {
    pub const ALL: [ProjectType; 6] = [
        ProjectType::Robotics,
        ProjectType::Software,
        ProjectType::Game,
        ProjectType::Web,
        ProjectType::Cad,
        ProjectType::Research,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            ProjectType::Robotics => "Robotics",
            ProjectType::Software => "Software",
            ProjectType::Game => "Game",
            ProjectType::Web => "Web",
            ProjectType::Cad => "CAD",
            ProjectType::Research => "Research",
            ProjectType::Other(name) => name,
        }
    }
}

impl From<String> for ProjectType {
    fn from(name: String) -> Self {
        ProjectType::ALL
            .into_iter()
            .find(|known| known.as_str() == name)
            .unwrap_or_else(|| ProjectType::Other(name))
    }
}

impl From<ProjectType> for String {
    fn from(project_type: ProjectType) -> Self {
        match project_type {
            ProjectType::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ItemId,
    pub title: String,
    pub date: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(rename = "type")]
    pub project_type: ProjectType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    pub title: String,
    pub description: String,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreativeWork {
    pub id: ItemId,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub date: String,
    pub preview: String,
    pub full_content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotographyItem {
    pub id: ItemId,
    pub title: String,
    pub image: String,
    pub description: String,
}

/// Items that carry a collection-unique id.
pub trait Keyed {
    fn key(&self) -> &ItemId;
}

impl Keyed for Project {
    fn key(&self) -> &ItemId {
        &self.id
    }
}

impl Keyed for CreativeWork {
    fn key(&self) -> &ItemId {
        &self.id
    }
}

impl Keyed for PhotographyItem {
    fn key(&self) -> &ItemId {
        &self.id
    }
}

/// Project type selection on the projects section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectFilter {
    #[default]
    All,
    Only(ProjectType),
}

impl ProjectFilter {
    /// Filter buttons, in display order.
    pub fn options() -> impl Iterator<Item = ProjectFilter> {
        std::iter::once(ProjectFilter::All).chain(ProjectType::ALL.into_iter().map(ProjectFilter::Only))
    }

    pub fn label(&self) -> &str {
        match self {
            ProjectFilter::All => "All",
            ProjectFilter::Only(project_type) => project_type.as_str(),
        }
    }

    /// Value for the `project_type` query parameter; `None` means every type.
    pub fn project_type(&self) -> Option<ProjectType> {
        match self {
            ProjectFilter::All => None,
            ProjectFilter::Only(project_type) => Some(project_type.clone()),
        }
    }

    pub fn matches(&self, project: &Project) -> bool {
        match self {
            ProjectFilter::All => true,
            ProjectFilter::Only(project_type) => &project.project_type == project_type,
        }
    }
}

pub fn filter_projects(projects: &[Project], filter: &ProjectFilter) -> Vec<Project> {
    projects
        .iter()
        .filter(|project| filter.matches(project))
        .cloned()
        .collect()
}
