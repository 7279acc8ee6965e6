use crate::modules::i18n::ResolvedLocale;
use crate::modules::project::application::domain::entities::{
    LocalizedContent, Project, ProjectSize, ProjectType, TranslationBundle,
};
use crate::modules::project::application::domain::translation::{localize, LocalizedProject};

pub fn translation(title: &str, description: &str) -> LocalizedContent {
    LocalizedContent::new(title, description)
}

pub fn locale(locale: &str, fallback: &str) -> ResolvedLocale {
    ResolvedLocale {
        locale: locale.to_string(),
        fallback: fallback.to_string(),
    }
}

/// Showcase project with `en` and `nb` titles like `"{id} (nb)"`.
pub fn showcase_project(id: &str, size: ProjectSize) -> Project {
    let mut translations = TranslationBundle::new();
    for code in ["en", "nb"] {
        translations.insert(
            code.to_string(),
            translation(
                &format!("{id} ({code})"),
                &format!("Description of {id} ({code})"),
            ),
        );
    }

    Project {
        id: id.to_string(),
        translations,
        project_type: ProjectType::Showcase,
        size,
        technologies: vec!["Rust".to_string()],
        github_url: None,
        live_url: None,
        component: None,
        image: None,
        featured: false,
        details: None,
    }
}

/// Live project rendered by `Project{Id}`, e.g. `ProjectJson2csv`.
pub fn live_project(id: &str, size: ProjectSize) -> Project {
    let mut chars = id.chars();
    let component = match chars.next() {
        Some(first) => format!("Project{}{}", first.to_ascii_uppercase(), chars.as_str()),
        None => "Project".to_string(),
    };

    Project {
        project_type: ProjectType::Live,
        component: Some(component),
        ..showcase_project(id, size)
    }
}

pub fn localized_project(id: &str) -> LocalizedProject {
    localize(&showcase_project(id, ProjectSize::Large), "nb", "en")
        .expect("fixture carries both locales")
}
