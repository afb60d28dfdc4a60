//! Slider gallery: read-only media collaborator for the home page.

use std::collections::BTreeMap;

use tokio::sync::RwLock;

use tienda_core::SliderId;

use crate::models::Slider;

#[derive(Debug, Default)]
struct Inner {
    next_id: i32,
    sliders: BTreeMap<SliderId, Slider>,
}

/// Store for home-page sliders.
#[derive(Debug, Default)]
pub struct SliderGallery {
    inner: RwLock<Inner>,
}

impl SliderGallery {
    /// Create an empty gallery.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a slider, assigning it the next ID.
    pub async fn insert(&self, title: String, image_url: String) -> Slider {
        let mut inner = self.inner.write().await;

        inner.next_id += 1;
        let id = SliderId::new(inner.next_id);

        let slider = Slider {
            id,
            title,
            image_url,
        };
        inner.sliders.insert(id, slider.clone());
        slider
    }

    /// All sliders in display order.
    pub async fn list(&self) -> Vec<Slider> {
        self.inner.read().await.sliders.values().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_and_list_in_order() {
        let gallery = SliderGallery::new();
        gallery.insert("Rebajas".to_owned(), "/img/a.jpg".to_owned()).await;
        gallery.insert("Novedades".to_owned(), "/img/b.jpg".to_owned()).await;

        let sliders = gallery.list().await;
        assert_eq!(sliders.len(), 2);
        assert_eq!(sliders[0].title, "Rebajas");
        assert_eq!(sliders[1].title, "Novedades");
    }
}
