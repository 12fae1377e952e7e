//! Cursor-based pagination
//!
//! Turns a "fetch one page at cursor X" function into a stream of pages that
//! follows `next_cursor` until the provider stops returning one.

use std::future::Future;

use futures::{Stream, TryStreamExt, stream};

use crate::error::Result;
use crate::types::Page;

/// Stream the items of every page, one `Vec` per page.
///
/// `fetch` receives `None` for the first page and the previous page's
/// `next_cursor` afterwards. The first error ends the stream.
pub fn pages<'a, T, F, Fut>(mut fetch: F) -> impl Stream<Item = Result<Vec<T>>> + 'a
where
    T: 'a,
    F: FnMut(Option<String>) -> Fut + 'a,
    Fut: Future<Output = Result<Page<T>>> + 'a,
{
    // None: exhausted; Some(cursor): next page to request
    stream::try_unfold(Some(None), move |state: Option<Option<String>>| {
        let next = state.map(|cursor| {
            log::debug!("Fetching page (cursor: {cursor:?})");
            fetch(cursor)
        });
        async move {
            let Some(request) = next else {
                return Ok(None);
            };
            let page = request.await?;
            Ok(Some((page.items, page.next_cursor.map(Some))))
        }
    })
}

/// Collect every item across all pages.
pub async fn fetch_all<T, F, Fut>(fetch: F) -> Result<Vec<T>>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<Page<T>>>,
{
    pages(fetch).try_concat().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProviderError;
    use std::sync::Mutex;

    fn page(items: &[u32], next: Option<&str>) -> Page<u32> {
        Page::new(items.to_vec(), next.map(ToString::to_string))
    }

    #[tokio::test]
    async fn follows_cursors_until_exhausted() {
        let seen = Mutex::new(Vec::new());
        let seen_ref = &seen;

        let items = fetch_all(move |cursor: Option<String>| async move {
            seen_ref.lock().unwrap().push(cursor.clone());
            match cursor.as_deref() {
                None => Ok(page(&[1, 2], Some("m1"))),
                Some("m1") => Ok(page(&[3], Some("m2"))),
                Some("m2") => Ok(page(&[4, 5], None)),
                Some(other) => panic!("unexpected cursor {other}"),
            }
        })
        .await
        .unwrap();

        assert_eq!(items, vec![1, 2, 3, 4, 5]);
        assert_eq!(
            *seen.lock().unwrap(),
            vec![None, Some("m1".to_string()), Some("m2".to_string())]
        );
    }

    #[tokio::test]
    async fn single_page() {
        let items = fetch_all(|_cursor: Option<String>| async { Ok(page(&[7], None)) })
            .await
            .unwrap();
        assert_eq!(items, vec![7]);
    }

    #[tokio::test]
    async fn empty_listing() {
        let items = fetch_all(|_cursor: Option<String>| async { Ok(page(&[], None)) })
            .await
            .unwrap();
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn error_on_later_page_is_returned() {
        let result = fetch_all(|cursor: Option<String>| async move {
            match cursor {
                None => Ok(page(&[1], Some("m1"))),
                Some(_) => Err(ProviderError::NetworkError {
                    provider: "route53".into(),
                    detail: "connection reset".into(),
                }),
            }
        })
        .await;

        assert!(matches!(result, Err(ProviderError::NetworkError { .. })));
    }

    #[tokio::test]
    async fn pages_yields_one_vec_per_page() {
        let collected: Vec<Vec<u32>> = pages(|cursor: Option<String>| async move {
            match cursor.as_deref() {
                None => Ok(page(&[1, 2], Some("next"))),
                _ => Ok(page(&[3], None)),
            }
        })
        .try_collect()
        .await
        .unwrap();

        assert_eq!(collected, vec![vec![1, 2], vec![3]]);
    }
}
