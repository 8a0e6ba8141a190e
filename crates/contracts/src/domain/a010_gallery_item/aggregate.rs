use serde::{Deserialize, Serialize};

use crate::shared::validation::{self, ValidationError, ValidationResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryItem {
    pub id: String,
    pub title: String,
    pub image_url: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub is_published: bool,
    #[serde(default)]
    pub sort_order: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct GalleryItemDto {
    #[serde(skip_serializing)]
    pub id: Option<String>,
    pub title: String,
    pub image_url: String,
    pub category: Option<String>,
    pub description: Option<String>,
    pub is_featured: bool,
    pub is_published: bool,
    pub sort_order: i32,
}

impl GalleryItemDto {
    pub fn from_item(i: &GalleryItem) -> Self {
        Self {
            id: Some(i.id.clone()),
            title: i.title.clone(),
            image_url: i.image_url.clone(),
            category: i.category.clone(),
            description: i.description.clone(),
            is_featured: i.is_featured,
            is_published: i.is_published,
            sort_order: i.sort_order,
        }
    }

    pub fn validate(&self) -> ValidationResult {
        validation::require(&self.title, "Title")?;
        validation::require(&self.image_url, "Image URL")?;
        if !is_http_url(&self.image_url) {
            return Err(ValidationError::Rule(
                "Image URL must start with http:// or https://".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GalleryFilter {
    pub category: String,
}

pub fn is_http_url(value: &str) -> bool {
    let v = value.trim();
    validation::is_valid_url(v) && !v.starts_with('/')
}

/// Distinct non-empty categories, case-insensitively sorted.
pub fn gallery_categories(items: &[GalleryItem]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for c in items.iter().filter_map(|i| i.category.as_deref()) {
        let c = c.trim();
        if !c.is_empty() && !out.iter().any(|x| x.eq_ignore_ascii_case(c)) {
            out.push(c.to_string());
        }
    }
    out.sort_by_key(|c| c.to_lowercase());
    out
}

/// Items in a category (empty = all), featured first, then by sort order.
pub fn filter_gallery(items: &[GalleryItem], category: &str, published_only: bool) -> Vec<GalleryItem> {
    let category = category.trim();
    let mut out: Vec<GalleryItem> = items
        .iter()
        .filter(|i| !published_only || i.is_published)
        .filter(|i| {
            category.is_empty()
                || i.category
                    .as_deref()
                    .map_or(false, |c| c.trim().eq_ignore_ascii_case(category))
        })
        .cloned()
        .collect();
    out.sort_by(|a, b| {
        b.is_featured
            .cmp(&a.is_featured)
            .then_with(|| a.sort_order.cmp(&b.sort_order))
    });
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, cat: Option<&str>, featured: bool, published: bool, order: i32) -> GalleryItem {
        GalleryItem {
            id: id.into(),
            title: id.into(),
            image_url: format!("https://cdn.example.com/{}.jpg", id),
            category: cat.map(String::from),
            description: None,
            is_featured: featured,
            is_published: published,
            sort_order: order,
        }
    }

    #[test]
    fn test_categories() {
        let items = vec![
            item("a", Some("Signs"), false, true, 0),
            item("b", Some("banners"), false, true, 0),
            item("c", Some("signs"), false, true, 0),
            item("d", None, false, true, 0),
        ];
        assert_eq!(gallery_categories(&items), vec!["banners", "Signs"]);
    }

    #[test]
    fn test_filter_gallery() {
        let items = vec![
            item("a", Some("Signs"), false, true, 1),
            item("b", Some("Signs"), true, true, 5),
            item("c", Some("Signs"), false, false, 0),
            item("d", Some("Wraps"), false, true, 0),
        ];
        let ids = |v: Vec<GalleryItem>| v.into_iter().map(|i| i.id).collect::<Vec<_>>();
        assert_eq!(ids(filter_gallery(&items, "signs", true)), vec!["b", "a"]);
        assert_eq!(ids(filter_gallery(&items, "", false)), vec!["b", "c", "d", "a"]);
    }

    #[test]
    fn test_validate_url() {
        let mut dto = GalleryItemDto {
            title: "Storefront".into(),
            image_url: "/img/a.jpg".into(),
            ..Default::default()
        };
        assert!(matches!(dto.validate(), Err(ValidationError::Rule(_))));
        dto.image_url = "ftp://x/a.jpg".into();
        assert!(dto.validate().is_err());
        dto.image_url = "https://cdn.example.com/a.jpg".into();
        assert!(dto.validate().is_ok());
    }
}
