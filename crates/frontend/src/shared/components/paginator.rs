//! Pager with windowed page numbers and an optional go-to-page input.

use leptos::prelude::*;

use crate::shared::pagination::accepts_page;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEntry {
    Page(u32),
    Ellipsis,
}

/// Window of page numbers around the current page.
///
/// Up to 8 pages are shown in full; beyond that the window keeps the
/// first and last page visible with ellipses in between.
pub fn page_numbers(page: u32, total_pages: u32) -> Vec<PageEntry> {
    if total_pages <= 8 {
        return (1..=total_pages).map(PageEntry::Page).collect();
    }

    let mut pages = Vec::new();

    // near the start: 1-8, ellipsis, last
    if page <= 4 {
        pages.extend((1..=8).map(PageEntry::Page));
        pages.push(PageEntry::Ellipsis);
        pages.push(PageEntry::Page(total_pages));
        return pages;
    }

    // near the end: 1, ellipsis, last 8
    if page >= total_pages - 3 {
        pages.push(PageEntry::Page(1));
        pages.push(PageEntry::Ellipsis);
        pages.extend((total_pages - 7..=total_pages).map(PageEntry::Page));
        return pages;
    }

    // middle: 1, ellipsis, 7 pages centered on current, ellipsis, last
    pages.push(PageEntry::Page(1));
    pages.push(PageEntry::Ellipsis);
    pages.extend((page - 3..=page + 3).map(PageEntry::Page));
    pages.push(PageEntry::Ellipsis);
    pages.push(PageEntry::Page(total_pages));
    pages
}

const BTN: &str = "padding: 5px 10px; border: 1px solid #ddd; border-radius: 4px; background: white; cursor: pointer; font-size: 13px;";
const BTN_CURRENT: &str = "padding: 5px 10px; border: 1px solid #4a90e2; border-radius: 4px; background: #4a90e2; color: white; font-size: 13px;";

#[component]
pub fn Paginator(
    /// Current page (1-indexed)
    #[prop(into)]
    page: Signal<u32>,
    #[prop(into)] total_pages: Signal<u32>,
    /// Callback when page changes; only in-bounds pages are emitted
    on_page_change: Callback<u32>,
) -> impl IntoView {
    let go_to = RwSignal::new(String::new());

    let submit_go_to = move || {
        if let Ok(target) = go_to.get_untracked().trim().parse::<u32>() {
            if accepts_page(target, total_pages.get_untracked()) {
                on_page_change.run(target);
                go_to.set(String::new());
            }
        }
    };

    view! {
        <div style="display: flex; align-items: center; gap: 6px; justify-content: center; padding: 12px 0; flex-wrap: wrap;">
            <button
                style=BTN
                on:click=move |_| {
                    let p = page.get();
                    if p > 1 {
                        on_page_change.run(p - 1);
                    }
                }
                disabled=move || page.get() <= 1
            >
                "Previous"
            </button>

            {move || {
                page_numbers(page.get(), total_pages.get())
                    .into_iter()
                    .map(|entry| match entry {
                        PageEntry::Ellipsis => view! {
                            <span style="padding: 0 4px; color: #888;">"…"</span>
                        }
                        .into_any(),
                        PageEntry::Page(n) => {
                            let current = page.get() == n;
                            view! {
                                <button
                                    style=if current { BTN_CURRENT } else { BTN }
                                    on:click=move |_| on_page_change.run(n)
                                >
                                    {n.to_string()}
                                </button>
                            }
                            .into_any()
                        }
                    })
                    .collect_view()
            }}

            <button
                style=BTN
                on:click=move |_| {
                    let p = page.get();
                    if p < total_pages.get() {
                        on_page_change.run(p + 1);
                    }
                }
                disabled=move || page.get() >= total_pages.get()
            >
                "Next"
            </button>

            <Show when=move || { total_pages.get() > 9 }>
                <input
                    type="text"
                    placeholder="Go to..."
                    prop:value=move || go_to.get()
                    on:input=move |ev| go_to.set(event_target_value(&ev))
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            submit_go_to();
                        }
                    }
                    style="width: 70px; padding: 5px 8px; border: 1px solid #ddd; border-radius: 4px; font-size: 13px;"
                />
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nums(entries: &[PageEntry]) -> Vec<Option<u32>> {
        entries
            .iter()
            .map(|e| match e {
                PageEntry::Page(n) => Some(*n),
                PageEntry::Ellipsis => None,
            })
            .collect()
    }

    #[test]
    fn few_pages_shown_in_full() {
        let entries = page_numbers(2, 5);
        assert_eq!(
            nums(&entries),
            vec![Some(1), Some(2), Some(3), Some(4), Some(5)]
        );
    }

    #[test]
    fn near_start_window() {
        let entries = page_numbers(3, 20);
        assert_eq!(
            nums(&entries),
            vec![
                Some(1),
                Some(2),
                Some(3),
                Some(4),
                Some(5),
                Some(6),
                Some(7),
                Some(8),
                None,
                Some(20)
            ]
        );
    }

    #[test]
    fn near_end_window() {
        let entries = page_numbers(19, 20);
        assert_eq!(
            nums(&entries),
            vec![
                Some(1),
                None,
                Some(13),
                Some(14),
                Some(15),
                Some(16),
                Some(17),
                Some(18),
                Some(19),
                Some(20)
            ]
        );
    }

    #[test]
    fn middle_window_is_centered() {
        let entries = page_numbers(10, 20);
        assert_eq!(
            nums(&entries),
            vec![
                Some(1),
                None,
                Some(7),
                Some(8),
                Some(9),
                Some(10),
                Some(11),
                Some(12),
                Some(13),
                None,
                Some(20)
            ]
        );
    }

    #[test]
    fn zero_pages_renders_nothing() {
        assert!(page_numbers(1, 0).is_empty());
    }
}
