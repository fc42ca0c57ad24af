//! Lazy iteration over token-paged API responses.

use crate::error::Result;
use crate::transport::records::Page;

/// Internal cursor state of a [`PageIter`].
enum Cursor {
    /// No page fetched yet; the first fetch carries no token.
    NotStarted,
    /// The previous page produced this continuation token.
    Token(String),
    /// The previous page carried no token, or a fetch failed.
    Done,
}

/// A lazy, finite, forward-only sequence of items across an unbounded
/// number of server-side pages.
///
/// Given a page-fetch operation parameterized by an optional continuation
/// token, the iterator:
///
/// 1. fetches the first page with no token on the first `next()` call,
/// 2. yields every item of the current page in page order,
/// 3. once a page is exhausted, follows its continuation token to the next
///    page, or terminates when the token is absent.
///
/// Pull-based: a page is never fetched until the caller has consumed every
/// item of the previous page, so at most one page is buffered. An empty
/// page with a present token continues to the next page rather than
/// terminating; token absence is the sole stop signal, and a server that
/// always returns a token produces an unbounded sequence by design.
///
/// A fetch error is yielded once as `Err`, after which the iterator is
/// exhausted. The cursor is destructive and single-use; concurrent
/// consumers must each build their own iterator over their own fetch
/// closure.
///
/// ## Example
///
/// ```rust
/// use palantir::client::PageIter;
/// use palantir::transport::Page;
///
/// let mut pages = vec![
///     Page { data: vec![1, 2], next_page_token: Some("t1".into()) },
///     Page { data: vec![3], next_page_token: None },
/// ]
/// .into_iter();
///
/// let iter = PageIter::new(move |_token| Ok(pages.next().unwrap_or_default()));
/// let items: Result<Vec<i32>, _> = iter.collect();
/// assert_eq!(items.unwrap(), vec![1, 2, 3]);
/// ```
pub struct PageIter<T, F> {
    fetch: F,
    buffer: std::vec::IntoIter<T>,
    cursor: Cursor,
}

impl<T, F> PageIter<T, F>
where
    F: FnMut(Option<&str>) -> Result<Page<T>>,
{
    /// Creates an iterator over `fetch`, which receives `None` for the
    /// first page and the previous page's continuation token afterwards.
    pub fn new(fetch: F) -> Self {
        Self {
            fetch,
            buffer: Vec::new().into_iter(),
            cursor: Cursor::NotStarted,
        }
    }
}

impl<T, F> Iterator for PageIter<T, F>
where
    F: FnMut(Option<&str>) -> Result<Page<T>>,
{
    type Item = Result<T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(item) = self.buffer.next() {
                return Some(Ok(item));
            }

            let token = match &self.cursor {
                Cursor::Done => return None,
                Cursor::NotStarted => None,
                Cursor::Token(token) => Some(token.clone()),
            };

            match (self.fetch)(token.as_deref()) {
                Ok(page) => {
                    self.cursor = match page.next_page_token {
                        Some(next) => Cursor::Token(next),
                        None => Cursor::Done,
                    };
                    self.buffer = page.data.into_iter();
                    // An empty page with a token loops straight into the
                    // next fetch.
                }
                Err(err) => {
                    self.cursor = Cursor::Done;
                    return Some(Err(err));
                }
            }
        }
    }
}

impl<T, F> std::iter::FusedIterator for PageIter<T, F> where
    F: FnMut(Option<&str>) -> Result<Page<T>>
{
}
