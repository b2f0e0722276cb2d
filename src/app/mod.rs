pub mod nav;
pub mod portfolio;
mod sections;

#[cfg(feature = "ssr")]
use std::sync::Arc;

use crate::error_template::{AppError, ErrorTemplate};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use self::nav::{NavBar, Section};
use self::portfolio::{
    Achievement, CreativeWork, EducationEntry, PhotographyItem, Profile, Project, ProjectType,
    Skills,
};
use self::sections::*;

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/portfolio-site.css"/>

        <Title text="Portfolio"/>
        <Meta name="description" content="Projects, education and achievements"/>

        <Router fallback=|| {
            let mut outside_errors = Errors::default();
            outside_errors.insert_with_default_key(AppError::NotFound);
            view! {
                <ErrorTemplate outside_errors/>
            }
            .into_view()
        }>
            <main>
                <Routes>
                    <Route path="" view=HomePage/>
                </Routes>
            </main>
        </Router>
    }
}

/// The whole portfolio on one scrolling page.
///
/// Every section fetches its own resource, so the calls run side by side
/// and one failing endpoint only blanks its own section.
#[component]
fn HomePage() -> impl IntoView {
    let active = create_rw_signal(Section::Hero);
    // hero, about, contact and the footer all render from the same profile
    let profile = create_resource(|| (), |_| get_profile());

    view! {
        <div class="grid-backdrop"></div>
        <NavBar active/>

        <HeroSection profile active/>
        <AboutSection profile/>
        <EducationSection/>
        <SkillsSection/>
        <ProjectsSection/>
        <AchievementsSection/>
        <CreativeSection/>
        <PhotographySection/>
        <ContactSection profile/>

        <Footer profile/>
    }
}

#[cfg(feature = "ssr")]
fn portfolio_client() -> Result<Arc<portfolio::PortfolioClient>, ServerFnError> {
    use_context::<Arc<portfolio::PortfolioClient>>()
        .ok_or_else(|| ServerFnError::new("portfolio client is not configured"))
}

#[server]
pub async fn get_profile() -> Result<Profile, ServerFnError> {
    portfolio_client()?
        .get_profile()
        .await
        .map_err(ServerFnError::new)
}

#[server]
pub async fn get_education() -> Result<Vec<EducationEntry>, ServerFnError> {
    portfolio_client()?
        .get_education()
        .await
        .map_err(ServerFnError::new)
}

#[server]
pub async fn get_skills() -> Result<Skills, ServerFnError> {
    portfolio_client()?
        .get_skills()
        .await
        .map_err(ServerFnError::new)
}

#[server]
pub async fn get_projects(project_type: Option<ProjectType>) -> Result<Vec<Project>, ServerFnError> {
    portfolio_client()?
        .get_projects(project_type)
        .await
        .map_err(ServerFnError::new)
}

#[server]
pub async fn get_achievements() -> Result<Vec<Achievement>, ServerFnError> {
    portfolio_client()?
        .get_achievements()
        .await
        .map_err(ServerFnError::new)
}

#[server]
pub async fn get_creative_works() -> Result<Vec<CreativeWork>, ServerFnError> {
    portfolio_client()?
        .get_creative_works()
        .await
        .map_err(ServerFnError::new)
}

#[server]
pub async fn get_photography() -> Result<Vec<PhotographyItem>, ServerFnError> {
    portfolio_client()?
        .get_photography()
        .await
        .map_err(ServerFnError::new)
}
