//! Static content shown by the carousels: partner providers and news.
//!
//! The built-in lists mirror the published landing page. A TOML file with
//! `[[providers]]` and `[[news]]` tables can replace them.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provider {
    pub id: u32,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    /// Logo image reference (path or URL).
    pub logo: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    pub id: u32,
    pub title: String,
    pub date: String,
    pub category: String,
    pub excerpt: String,
    pub image: String,
    /// Outbound link to the full article.
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub providers: Vec<Provider>,
    #[serde(default)]
    pub news: Vec<NewsItem>,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Catalog validation failed: {message}")]
    ValidationError { message: String },
}

fn provider(id: u32, title: &str, subtitle: &str, description: &str, logo: &str) -> Provider {
    Provider {
        id,
        title: title.to_string(),
        subtitle: subtitle.to_string(),
        description: description.to_string(),
        logo: logo.to_string(),
    }
}

impl Catalog {
    pub fn builtin() -> Self {
        let providers = vec![
            provider(
                1,
                "ISAPRE CRUZ BLANCA",
                "GINECÓLOGA",
                "Con más de una década de experiencia, la Dra. Herrera es la residente experta en ginecología general y salud de la mujer.",
                "/images/isapre-cruz-blanca.jpeg",
            ),
            provider(
                2,
                "ISAPRE CONSALUD",
                "GINECÓLOGO Y OBSTETRA",
                "Desde 1983, cuenta con más de 40 años de trayectoria y una de las mayores participaciones del sistema ISAPRE en Chile.",
                "/images/isapre-consalud.png",
            ),
            provider(
                3,
                "ISAPRE COLMENA",
                "GINECÓLOGA Y OBSTETRA",
                "Creada en los inicios del sistema ISAPRE en 1981, mantiene trayectoria histórica y presencia consolidada en el mercado privado.",
                "/images/isapre-colmena.png",
            ),
            provider(
                4,
                "ISAPRE BANMEDICA",
                "GINECÓLOGA",
                "Fundada en los años 80, forma parte de un grupo internacional de salud con fuerte presencia en el sistema privado chileno.",
                "/images/isapre-banmedica.png",
            ),
            provider(
                5,
                "ISAPRE NUEVA MASVIDA",
                "GINECÓLOGA Y OBSTETRA",
                "Reorganizada en 2017, continúa operando en el sistema ISAPRE con planes orientados a distintos perfiles de afiliados.",
                "/images/isapre-nueva-masvida.png",
            ),
            provider(
                6,
                "ISAPRE VIDA TRES",
                "GINECÓLOGA Y OBSTETRA",
                "Activa desde los primeros años del sistema privado, actualmente integra el mismo grupo controlador de Banmédica en Chile.",
                "/images/isapre-vida-tres.png",
            ),
            provider(
                7,
                "ISAPRE ESENCIAL",
                "GINECÓLOGA Y OBSTETRA",
                "Incorporada recientemente al sistema ISAPRE, destaca por su enfoque digital, estructura ágil y propuesta orientada a eficiencia operativa.",
                "/images/isapre-esencial.png",
            ),
        ];

        let news = vec![
            NewsItem {
                id: 1,
                title: "Por alza GES: Revisa cuánto aumentará el valor de los planes".to_string(),
                date: "07 Ene 2026".to_string(),
                category: "Actualidad".to_string(),
                excerpt: "Conoce el detalle del reajuste en el valor de los planes de salud por concepto de las Garantías Explícitas en Salud (GES) para cada Isapre.".to_string(),
                image: "/images/noticia1.webp".to_string(),
                url: "https://www.biobiochile.cl/noticias/servicios/toma-nota/2026/01/07/por-alza-ges-revisa-aqui-cuanto-aumentara-el-valor-de-los-planes-de-cada-isapre.shtml".to_string(),
            },
            NewsItem {
                id: 2,
                title: "Conoce las tres nuevas patologías incorporadas al GES".to_string(),
                date: "Reciente".to_string(),
                category: "Salud Pública".to_string(),
                excerpt: "El Ministerio de Salud ha anunciado la inclusión de nuevas enfermedades al sistema de Garantías Explícitas en Salud, ampliando la cobertura y protección.".to_string(),
                image: "https://images.unsplash.com/photo-1579684385127-1ef15d508118?q=80&w=800&auto=format&fit=crop".to_string(),
                url: "https://www.gob.cl/noticias/conoce-las-tres-nuevas-patologias-ges/".to_string(),
            },
            NewsItem {
                id: 3,
                title: "Informativo Oficial Superintendencia de Salud (PDF)".to_string(),
                date: "Documento Oficial".to_string(),
                category: "Regulación".to_string(),
                excerpt: "Revisa la circular y documentación oficial emitida por la Superintendencia de Salud respecto a las normativas vigentes del sistema privado.".to_string(),
                image: "https://images.unsplash.com/photo-1450101499163-c8848c66ca85?q=80&w=800&auto=format&fit=crop".to_string(),
                url: "https://www.superdesalud.gob.cl/difusion/665/articles-17525_recurso_1.pdf".to_string(),
            },
        ];

        Self { providers, news }
    }

    /// Built-in catalog, or the file at `path` when given.
    pub fn resolve(path: Option<&Path>) -> Result<Self, CatalogError> {
        match path {
            Some(path) => Self::load_from(path),
            None => Ok(Self::builtin()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path).map_err(|e| CatalogError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let catalog: Catalog = toml::from_str(&content).map_err(|e| CatalogError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        catalog.validate()?;
        Ok(catalog)
    }

    /// Ids must be unique within each list and titles non-blank.
    /// Empty lists are allowed; the carousel shows an empty page.
    pub fn validate(&self) -> Result<(), CatalogError> {
        check_entries("providers", self.providers.iter().map(|p| (p.id, p.title.as_str())))?;
        check_entries("news", self.news.iter().map(|n| (n.id, n.title.as_str())))
    }
}

fn check_entries<'a>(
    list: &str,
    entries: impl Iterator<Item = (u32, &'a str)>,
) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for (id, title) in entries {
        if !seen.insert(id) {
            return Err(CatalogError::ValidationError {
                message: format!("{}: duplicate id {}", list, id),
            });
        }
        if title.trim().is_empty() {
            return Err(CatalogError::ValidationError {
                message: format!("{}: entry {} has an empty title", list, id),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_matches_landing_page() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.providers.len(), 7);
        assert_eq!(catalog.news.len(), 3);
        assert_eq!(catalog.providers[0].title, "ISAPRE CRUZ BLANCA");
        assert!(catalog.validate().is_ok());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut catalog = Catalog::builtin();
        catalog.providers[1].id = catalog.providers[0].id;
        let err = catalog.validate().unwrap_err();
        assert!(err.to_string().contains("duplicate id 1"));
    }

    #[test]
    fn blank_titles_are_rejected() {
        let mut catalog = Catalog::builtin();
        catalog.news[2].title = "  ".to_string();
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::ValidationError { .. })
        ));
    }

    #[test]
    fn empty_catalog_is_valid() {
        assert!(Catalog::default().validate().is_ok());
    }

    #[test]
    fn resolve_without_path_is_builtin() {
        assert_eq!(Catalog::resolve(None).expect("builtin"), Catalog::builtin());
    }
}
