use std::future::Future;

use crate::error::Result;

pub struct Paginator {
    per_page: u32,
}

impl Paginator {
    pub fn new(per_page: u32) -> Self {
        Self {
            per_page: per_page.max(1),
        }
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    pub async fn fetch_all<T, F, Fut>(&self, mut fetch_page: F) -> Result<Vec<T>>
    where
        F: FnMut(u32) -> Fut,
        Fut: Future<Output = Result<Vec<T>>>,
    {
        let mut all_items = Vec::new();
        let mut page = 1;

        loop {
            let items = fetch_page(page).await?;
            let items_count = items.len();
            all_items.extend(items);

            tracing::debug!("Page {} returned {} items", page, items_count);

            if items_count < self.per_page as usize {
                break;
            }

            page += 1;
        }

        Ok(all_items)
    }
}
