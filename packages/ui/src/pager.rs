use dioxus::prelude::*;

/// Page sizes offered in the selector, merged with the configured default.
pub const PAGE_SIZE_OPTIONS: [usize; 4] = [5, 10, 20, 50];

pub fn page_size_options(default_size: usize) -> Vec<usize> {
    let mut sizes = PAGE_SIZE_OPTIONS.to_vec();
    sizes.push(default_size.max(1));
    sizes.sort_unstable();
    sizes.dedup();
    sizes
}

/// Pager controls below the user table.
///
/// Emits raw page requests; the caller ignores the ones that fall outside
/// `1..=total_pages`, which is how the edge buttons become no-ops.
#[component]
pub fn Pager(
    current_page: usize,
    total_pages: usize,
    window: Vec<usize>,
    page_size: usize,
    page_sizes: Vec<usize>,
    range_label: String,
    on_page: EventHandler<usize>,
    on_page_size: EventHandler<usize>,
) -> Element {
    let at_start = current_page <= 1;
    let at_end = current_page >= total_pages;

    rsx! {
        div {
            class: "pager",
            span { class: "pager-info", "{range_label}" }

            div {
                class: "pager-buttons",
                button {
                    disabled: at_start,
                    onclick: move |_| on_page.call(1),
                    "«"
                }
                button {
                    disabled: at_start,
                    onclick: move |_| on_page.call(current_page.saturating_sub(1)),
                    "‹"
                }
                for page in window {
                    button {
                        key: "{page}",
                        class: if page == current_page { "active" } else { "" },
                        onclick: move |_| on_page.call(page),
                        "{page}"
                    }
                }
                button {
                    disabled: at_end,
                    onclick: move |_| on_page.call(current_page + 1),
                    "›"
                }
                button {
                    disabled: at_end,
                    onclick: move |_| on_page.call(total_pages),
                    "»"
                }
            }

            label {
                class: "pager-size",
                "Per page "
                select {
                    value: "{page_size}",
                    onchange: move |evt| {
                        if let Some(size) = store::config::parse_page_size(&evt.value()) {
                            on_page_size.call(size);
                        }
                    },
                    for size in page_sizes {
                        option {
                            key: "{size}",
                            value: "{size}",
                            selected: size == page_size,
                            "{size}"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_size_options_include_default() {
        assert_eq!(page_size_options(10), vec![5, 10, 20, 50]);
        assert_eq!(page_size_options(25), vec![5, 10, 20, 25, 50]);
        assert_eq!(page_size_options(0), vec![1, 5, 10, 20, 50]);
    }
}
