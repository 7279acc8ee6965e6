// src/modules/project/adapter/outgoing/static_catalog.rs

use async_trait::async_trait;

use crate::modules::project::application::domain::entities::{
    LocalizedContent, Project, ProjectDetails, ProjectSize, ProjectType, TranslationBundle,
};
use crate::modules::project::application::ports::outgoing::catalog_source::{
    CatalogSource, CatalogSourceError,
};

/// The compiled-in project list of the site.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalogSource;

#[async_trait]
impl CatalogSource for StaticCatalogSource {
    async fn load(&self) -> Result<Vec<Project>, CatalogSourceError> {
        Ok(site_projects())
    }

    fn describe(&self) -> String {
        "compiled-in definition".to_string()
    }
}

fn lines(items: &[&str]) -> Option<Vec<String>> {
    Some(items.iter().map(|s| s.to_string()).collect())
}

pub fn site_projects() -> Vec<Project> {
    vec![
        // Large projects
        biddingwars(),
        // Small projects
        json2csv(),
    ]
}

fn biddingwars() -> Project {
    let mut translations = TranslationBundle::new();

    translations.insert(
        "en".to_string(),
        LocalizedContent {
            title: "Budbørsen - Auction Application".to_string(),
            description: "A fullstack web application for creating auctions, uploading images of items, and placing bids in real-time. Features user authentication, image management, and live bidding functionality.".to_string(),
            overview: Some("A comprehensive fullstack auction platform enabling users to create, manage, and participate in online auctions with secure authentication and real-time bidding capabilities.".to_string()),
            technical_details: Some("Built with a modern tech stack featuring Spring Boot 3 backend with Spring Security for authentication, SQLite database for data persistence, and Vue 3 with Composition API and TypeScript for a reactive frontend. The application follows clean architecture principles with proper separation of concerns, comprehensive exception handling, and extensive test coverage using JUnit 5 and Mockito.".to_string()),
            features: lines(&[
                "User authentication and authorization with JWT tokens",
                "Real-time bid placement and tracking",
                "Image upload and management for auction items",
                "Admin panel for user and auction management",
                "Category-based auction organization",
                "Secure payment integration ready",
                "RESTful API with Swagger documentation",
            ]),
            challenges: lines(&[
                "Implementing secure JWT-based authentication flow",
                "Managing real-time bid updates across multiple users",
                "Handling concurrent bid submissions to prevent race conditions",
                "Designing a flexible category system for diverse auction types",
                "Creating an intuitive admin interface for content moderation",
            ]),
            outcomes: lines(&[
                "Successfully deployed auction platform with user authentication",
                "Implemented comprehensive exception handling system",
                "Achieved test coverage for critical business logic",
                "Created detailed API documentation with Swagger",
                "Built responsive UI compatible with mobile and desktop",
            ]),
            future_improvements: lines(&[
                "Add Docker Compose for simplified deployment",
                "Implement WebSocket support for live bid notifications",
                "Integrate payment gateway for automated transactions",
                "Add email notifications for auction events",
                "Implement auction scheduling and auto-close functionality",
            ]),
        },
    );

    translations.insert(
        "nb".to_string(),
        LocalizedContent {
            title: "Budbørsen - Auksjonsapplikasjon".to_string(),
            description: "En fullstack webapplikasjon for å opprette auksjoner, laste opp bilder av gjenstander, og legge inn bud i sanntid. Funksjoner inkluderer brukerautentisering, bildehåndtering og live budgivning.".to_string(),
            overview: Some("En omfattende fullstack auksjonsplattform som gjør det mulig for brukere å opprette, administrere og delta i nettauksjoner med sikker autentisering og sanntids budgivning.".to_string()),
            technical_details: Some("Bygget med en moderne teknologistakk med Spring Boot 3 backend med Spring Security for autentisering, SQLite database for datalagring, og Vue 3 med Composition API og TypeScript for et reaktivt grensesnitt. Applikasjonen følger rene arkitekturprinsipper med korrekt separasjon av bekymringer, omfattende unntakshåndtering, og omfattende testdekning ved bruk av JUnit 5 og Mockito.".to_string()),
            features: lines(&[
                "Brukerautentisering og autorisasjon med JWT-tokens",
                "Sanntids budplassering og sporing",
                "Bildeopplasting og håndtering for auksjonsobjekter",
                "Adminpanel for bruker- og auksjonsstyring",
                "Kategori-basert auksjonsorganisering",
                "Sikker betalingsintegrasjon klar",
                "RESTful API med Swagger-dokumentasjon",
            ]),
            challenges: lines(&[
                "Implementering av sikker JWT-basert autentiseringsflyt",
                "Håndtering av sanntids budoppdateringer på tvers av flere brukere",
                "Håndtering av samtidige budinnsendinger for å forhindre race conditions",
                "Utforming av et fleksibelt kategorisystem for ulike auksjonstyper",
                "Oppretting av et intuitivt admin-grensesnitt for innholdsmoderering",
            ]),
            outcomes: lines(&[
                "Vellykket distribuert auksjonsplattform med brukerautentisering",
                "Implementert omfattende unntakshåndteringssystem",
                "Oppnådd testdekning for kritisk forretningslogikk",
                "Opprettet detaljert API-dokumentasjon med Swagger",
                "Bygget responsivt brukergrensesnitt kompatibelt med mobil og desktop",
            ]),
            future_improvements: lines(&[
                "Legge til Docker Compose for forenklede distribusjoner",
                "Implementere WebSocket-støtte for live budvarsler",
                "Integrere betalingsgateway for automatiserte transaksjoner",
                "Legge til e-postvarsler for auksjonshendelser",
                "Implementere auksjonsplanlegging og auto-lukke funksjonalitet",
            ]),
        },
    );

    Project {
        id: "biddingwars".to_string(),
        translations,
        project_type: ProjectType::Showcase,
        size: ProjectSize::Large,
        technologies: [
            "Java 21",
            "Spring Boot 3",
            "Vue 3",
            "TypeScript",
            "Pinia",
            "SQLite",
            "Spring Security",
            "JWT",
        ]
        .iter()
        .map(|t| t.to_string())
        .collect(),
        github_url: Some("https://github.com/Oleandertengesdal/biddingwars".to_string()),
        live_url: None,
        component: None,
        image: None,
        featured: true,
        details: Some(ProjectDetails {
            year: Some("2026".to_string()),
            duration: Some("3 weeks".to_string()),
            role: Some("Full-stack Developer".to_string()),
            team: Some("Solo Project".to_string()),
            status: Some("In Development".to_string()),
        }),
    }
}

fn json2csv() -> Project {
    let mut translations = TranslationBundle::new();

    translations.insert(
        "en".to_string(),
        LocalizedContent::new(
            "JSON to CSV Converter",
            "A lightweight, browser-based tool to convert JSON data to CSV format and vice versa. All processing happens locally for speed and privacy.",
        ),
    );
    translations.insert(
        "nb".to_string(),
        LocalizedContent::new(
            "JSON til CSV-konverterer",
            "Et lett nettleserbasert verktøy for å konvertere JSON-data til CSV-format og omvendt. All behandling skjer lokalt for hastighet og personvern.",
        ),
    );

    Project {
        id: "json2csv".to_string(),
        translations,
        project_type: ProjectType::Live,
        size: ProjectSize::Small,
        technologies: ["TypeScript", "HTML5", "CSS3"]
            .iter()
            .map(|t| t.to_string())
            .collect(),
        github_url: Some("https://github.com/Oleandertengesdal/Json2CSV".to_string()),
        live_url: None,
        component: Some("ProjectJson2CSV".to_string()),
        image: None,
        featured: false,
        details: None,
    }
}
