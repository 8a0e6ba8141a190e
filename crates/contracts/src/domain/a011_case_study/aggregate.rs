use serde::{Deserialize, Serialize};

use crate::domain::a010_gallery_item::aggregate::{is_http_url, GalleryItem};
use crate::shared::validation::{self, ValidationError, ValidationResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseStudy {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub client_name: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub challenge: String,
    #[serde(default)]
    pub solution: String,
    #[serde(default)]
    pub outcome: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub gallery_item_ids: Vec<String>,
    #[serde(default)]
    pub is_published: bool,
}

impl CaseStudy {
    /// Linked gallery items in the order stored on the case study; unknown ids skipped.
    pub fn linked_items(&self, gallery: &[GalleryItem]) -> Vec<GalleryItem> {
        self.gallery_item_ids
            .iter()
            .filter_map(|id| gallery.iter().find(|g| &g.id == id).cloned())
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CaseStudyDto {
    #[serde(skip_serializing)]
    pub id: Option<String>,
    pub title: String,
    pub client_name: Option<String>,
    pub industry: Option<String>,
    pub challenge: String,
    pub solution: String,
    pub outcome: String,
    pub image_url: Option<String>,
    pub gallery_item_ids: Vec<String>,
    pub is_published: bool,
}

impl CaseStudyDto {
    pub fn from_case_study(c: &CaseStudy) -> Self {
        Self {
            id: Some(c.id.clone()),
            title: c.title.clone(),
            client_name: c.client_name.clone(),
            industry: c.industry.clone(),
            challenge: c.challenge.clone(),
            solution: c.solution.clone(),
            outcome: c.outcome.clone(),
            image_url: c.image_url.clone(),
            gallery_item_ids: c.gallery_item_ids.clone(),
            is_published: c.is_published,
        }
    }

    pub fn toggle_gallery_item(&mut self, id: &str) {
        if let Some(pos) = self.gallery_item_ids.iter().position(|x| x == id) {
            self.gallery_item_ids.remove(pos);
        } else {
            self.gallery_item_ids.push(id.to_string());
        }
    }

    pub fn validate(&self) -> ValidationResult {
        validation::require(&self.title, "Title")?;
        if let Some(url) = self.image_url.as_deref().filter(|u| !u.trim().is_empty()) {
            if !is_http_url(url) {
                return Err(ValidationError::Rule(
                    "Image URL must start with http:// or https://".to_string(),
                ));
            }
        }
        if self.is_published {
            validation::require(&self.challenge, "Challenge")?;
            validation::require(&self.solution, "Solution")?;
        }
        Ok(())
    }
}

pub fn published(items: &[CaseStudy]) -> Vec<CaseStudy> {
    items.iter().filter(|c| c.is_published).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate() {
        let mut dto = CaseStudyDto {
            title: "Downtown Cafe refit".into(),
            ..Default::default()
        };
        assert!(dto.validate().is_ok());
        dto.is_published = true;
        assert_eq!(dto.validate(), Err(ValidationError::Required("Challenge")));
        dto.challenge = "Old signage".into();
        dto.solution = "New lightbox".into();
        assert!(dto.validate().is_ok());
        dto.image_url = Some("cafe.jpg".into());
        assert!(dto.validate().is_err());
        dto.image_url = Some("".into());
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_toggle_and_link() {
        let mut dto = CaseStudyDto::default();
        dto.toggle_gallery_item("g2");
        dto.toggle_gallery_item("g1");
        dto.toggle_gallery_item("g2");
        assert_eq!(dto.gallery_item_ids, vec!["g1".to_string()]);

        let json = serde_json::json!({
            "id": "cs1", "title": "T", "gallery_item_ids": ["g2", "missing", "g1"]
        });
        let cs: CaseStudy = serde_json::from_value(json).unwrap();
        let gallery: Vec<GalleryItem> = ["g1", "g2"]
            .iter()
            .map(|id| GalleryItem {
                id: id.to_string(),
                title: id.to_string(),
                image_url: "https://x/y.jpg".into(),
                category: None,
                description: None,
                is_featured: false,
                is_published: true,
                sort_order: 0,
            })
            .collect();
        let linked: Vec<String> = cs.linked_items(&gallery).into_iter().map(|g| g.id).collect();
        assert_eq!(linked, vec!["g2", "g1"]);
    }
}
