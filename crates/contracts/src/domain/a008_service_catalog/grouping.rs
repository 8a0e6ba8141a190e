use serde::{Deserialize, Serialize};

use super::aggregate::{Service, ServiceCategory};

/// `GET /api/services/grouped` element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceGroup {
    /// `None` for the "uncategorised" bucket
    #[serde(default)]
    pub category: Option<ServiceCategory>,
    #[serde(default)]
    pub services: Vec<Service>,
}

impl ServiceGroup {
    pub fn title(&self) -> &str {
        self.category.as_ref().map_or(UNCATEGORISED, |c| c.name.as_str())
    }
}

pub const UNCATEGORISED: &str = "Other services";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlatService {
    pub category_name: String,
    pub category_slug: Option<String>,
    pub service: Service,
}

/// Flattens the public grouped payload, keeping order and dropping inactive services.
pub fn flatten_groups(groups: &[ServiceGroup]) -> Vec<FlatService> {
    groups
        .iter()
        .flat_map(|group| {
            group
                .services
                .iter()
                .filter(|s| s.is_active)
                .map(move |s| FlatService {
                    category_name: group.title().to_string(),
                    category_slug: group.category.as_ref().map(|c| c.slug.clone()),
                    service: s.clone(),
                })
        })
        .collect()
}

/// Rebuilds groups from flat admin lists: categories by sort order then name,
/// services by sort order then name, uncategorised (or unknown category) last.
pub fn group_services(categories: &[ServiceCategory], services: &[Service]) -> Vec<ServiceGroup> {
    let mut cats: Vec<ServiceCategory> = categories.to_vec();
    cats.sort_by(|a, b| a.sort_order.cmp(&b.sort_order).then_with(|| a.name.cmp(&b.name)));

    let sorted = |mut list: Vec<Service>| {
        list.sort_by(|a, b| a.sort_order.cmp(&b.sort_order).then_with(|| a.name.cmp(&b.name)));
        list
    };

    let mut groups: Vec<ServiceGroup> = cats
        .iter()
        .map(|c| ServiceGroup {
            category: Some(c.clone()),
            services: sorted(
                services
                    .iter()
                    .filter(|s| s.category_id.as_deref() == Some(c.id.as_str()))
                    .cloned()
                    .collect(),
            ),
        })
        .collect();

    let orphans: Vec<Service> = services
        .iter()
        .filter(|s| {
            s.category_id
                .as_deref()
                .map_or(true, |id| !cats.iter().any(|c| c.id == id))
        })
        .cloned()
        .collect();
    if !orphans.is_empty() {
        groups.push(ServiceGroup {
            category: None,
            services: sorted(orphans),
        });
    }
    groups
}

/// Catalog filter, persisted in the query string as `category=<slug>`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CatalogFilter {
    pub category: String,
}

/// Keeps only groups matching a category slug; empty slug keeps all.
pub fn filter_by_category(groups: Vec<ServiceGroup>, slug: &str) -> Vec<ServiceGroup> {
    if slug.is_empty() {
        return groups;
    }
    groups
        .into_iter()
        .filter(|g| g.category.as_ref().map_or(false, |c| c.slug == slug))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn cat(id: &str, name: &str, order: i32) -> ServiceCategory {
        ServiceCategory {
            id: id.into(),
            name: name.into(),
            slug: name.to_lowercase(),
            description: None,
            sort_order: order,
        }
    }

    fn svc(id: &str, cat: Option<&str>, order: i32, active: bool) -> Service {
        Service {
            id: id.into(),
            category_id: cat.map(String::from),
            name: id.to_uppercase(),
            slug: id.into(),
            short_description: None,
            description: None,
            base_price: 1.0,
            price_unit: None,
            is_active: active,
            is_featured: false,
            sort_order: order,
            options: vec![],
        }
    }

    #[test]
    fn test_flatten_preserves_order_and_drops_inactive() {
        let payload = json!([
            {"category": {"id": "c1", "name": "Banners", "slug": "banners"},
             "services": [
                {"id": "b", "name": "B", "slug": "b", "base_price": 1.0},
                {"id": "x", "name": "X", "slug": "x", "base_price": 1.0, "is_active": false},
                {"id": "a", "name": "A", "slug": "a", "base_price": 1.0}
             ]},
            {"category": null, "services": [
                {"id": "z", "name": "Z", "slug": "z", "base_price": 2.0}
            ]}
        ]);
        let groups: Vec<ServiceGroup> = serde_json::from_value(payload).unwrap();
        let flat = flatten_groups(&groups);
        let ids: Vec<&str> = flat.iter().map(|f| f.service.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "z"]);
        assert_eq!(flat[0].category_name, "Banners");
        assert_eq!(flat[2].category_name, UNCATEGORISED);
        assert_eq!(flat[2].category_slug, None);
    }

    #[test]
    fn test_group_services() {
        let cats = vec![cat("c2", "Signs", 2), cat("c1", "Banners", 1)];
        let services = vec![
            svc("s3", Some("c1"), 2, true),
            svc("s1", Some("c1"), 1, true),
            svc("s2", Some("c2"), 0, false),
            svc("s4", None, 0, true),
            svc("s5", Some("gone"), 0, true),
        ];
        let groups = group_services(&cats, &services);
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].title(), "Banners");
        let first: Vec<&str> = groups[0].services.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(first, vec!["s1", "s3"]);
        assert_eq!(groups[1].services.len(), 1);
        assert!(groups[2].category.is_none());
        assert_eq!(groups[2].services.len(), 2);
    }

    #[test]
    fn test_filter_by_category() {
        let cats = vec![cat("c1", "Banners", 1), cat("c2", "Signs", 2)];
        let groups = group_services(&cats, &[svc("s1", Some("c2"), 0, true)]);
        assert_eq!(filter_by_category(groups.clone(), "").len(), 2);
        let only = filter_by_category(groups, "signs");
        assert_eq!(only.len(), 1);
        assert_eq!(only[0].services.len(), 1);
    }
}
