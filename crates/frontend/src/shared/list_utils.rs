/// Утилиты для списков: поиск с подсказками и подсветка совпадений
use contracts::shared::text::{fold_search, suggest};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Подсказки появляются с первого символа
pub const SUGGEST_MIN_CHARS: usize = 1;
pub const SUGGEST_MAX_ITEMS: usize = 30;
const DEBOUNCE_MS: u32 = 250;

/// Splits `text` into `(segment, highlighted)` parts by char-index ranges.
///
/// Ranges past the end are clamped, overlapping ones are merged.
pub fn split_highlight(text: &str, ranges: &[(usize, usize)]) -> Vec<(String, bool)> {
    let chars: Vec<char> = text.chars().collect();
    let mut marks = vec![false; chars.len()];
    for &(start, end) in ranges {
        for m in marks.iter_mut().take(end.min(chars.len())).skip(start) {
            *m = true;
        }
    }

    let mut parts: Vec<(String, bool)> = Vec::new();
    for (c, marked) in chars.into_iter().zip(marks) {
        match parts.last_mut() {
            Some((segment, m)) if *m == marked => segment.push(c),
            _ => parts.push((c.to_string(), marked)),
        }
    }
    parts
}

/// Char ranges of occurrences of `query` in `text`, compared the way the
/// search filter compares them.
pub fn match_ranges(text: &str, query: &str) -> Vec<(usize, usize)> {
    let hay: Vec<char> = fold_search(text).chars().collect();
    let needle: Vec<char> = fold_search(query.trim()).chars().collect();
    if needle.is_empty() || needle.len() > hay.len() {
        return Vec::new();
    }

    let mut ranges = Vec::new();
    let mut i = 0;
    while i + needle.len() <= hay.len() {
        if hay[i..i + needle.len()] == needle[..] {
            ranges.push((i, i + needle.len()));
            i += needle.len();
        } else {
            i += 1;
        }
    }
    ranges
}

/// Подсветка совпадений в тексте
pub fn highlight_ranges(text: &str, ranges: &[(usize, usize)]) -> AnyView {
    split_highlight(text, ranges)
        .into_iter()
        .map(|(segment, marked)| {
            if marked {
                view! { <mark class="search-hit">{segment}</mark> }.into_any()
            } else {
                view! { <span>{segment}</span> }.into_any()
            }
        })
        .collect_view()
        .into_any()
}

/// Поле поиска с debounce, кнопкой очистки и списком подсказок.
///
/// `value` receives the applied search text; typing only updates the local
/// input until the debounce elapses. Picking a suggestion applies it at once.
#[component]
pub fn SearchInput(
    /// Applied search text
    value: RwSignal<String>,
    /// Candidate texts for suggestions (visible row names)
    #[prop(into)]
    hints: Signal<Vec<String>>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Ara...".to_string()
    } else {
        placeholder
    };

    let input_value = RwSignal::new(value.get_untracked());
    let show_suggestions = RwSignal::new(false);
    // Номер последнего ввода: устаревшие таймеры ничего не применяют
    let generation = StoredValue::new(0u64);

    let suggestions = Memo::new(move |_| {
        let q = input_value.get();
        hints.with(|h| suggest(&q, h.as_slice(), SUGGEST_MIN_CHARS, SUGGEST_MAX_ITEMS))
    });

    let handle_input_change = move |new_value: String| {
        input_value.set(new_value.clone());
        show_suggestions.set(true);
        generation.update_value(|g| *g += 1);
        let current = generation.get_value();
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(DEBOUNCE_MS).await;
            if generation.try_get_value() == Some(current) {
                value.set(new_value);
            }
        });
    };

    let apply_now = move |text: String| {
        generation.update_value(|g| *g += 1);
        input_value.set(text.clone());
        value.set(text);
        show_suggestions.set(false);
    };

    let clear_filter = move |_| apply_now(String::new());

    // Внешний сброс фильтра (кнопка «Temizle») синхронизирует поле
    Effect::new(move |_| {
        let applied = value.get();
        if applied.is_empty() && !input_value.get_untracked().is_empty() {
            input_value.set(String::new());
        }
    });

    let is_filter_active = move || !value.get().trim().is_empty();

    view! {
        <div class="search-input" style="position: relative; display: inline-flex; align-items: center;">
            <input
                type="text"
                class="search-input__field"
                class:search-input__field--active=is_filter_active
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
                on:focus=move |_| show_suggestions.set(true)
                on:blur=move |_| show_suggestions.set(false)
                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                    match ev.key().as_str() {
                        "Enter" => apply_now(input_value.get_untracked()),
                        "Escape" => show_suggestions.set(false),
                        _ => {}
                    }
                }
            />
            <Show when=move || !input_value.get().is_empty()>
                <button
                    class="search-input__clear"
                    on:click=clear_filter
                    title="Temizle"
                >
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
            <Show when=move || show_suggestions.get() && !suggestions.with(|s| s.is_empty())>
                <ul class="search-input__suggestions">
                    <For
                        each=move || suggestions.get()
                        key=|hit| hit.text.clone()
                        children=move |hit| {
                            let text = hit.text.clone();
                            view! {
                                <li
                                    class="search-input__suggestion"
                                    // mousedown срабатывает раньше blur у поля
                                    on:mousedown=move |ev| {
                                        ev.prevent_default();
                                        apply_now(text.clone());
                                    }
                                >
                                    {highlight_ranges(&hit.text, &hit.ranges)}
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_highlight() {
        assert_eq!(
            split_highlight("Güvenlik", &[(0, 3)]),
            vec![("Güv".to_string(), true), ("enlik".to_string(), false)]
        );
        assert_eq!(split_highlight("abc", &[]), vec![("abc".to_string(), false)]);
    }

    #[test]
    fn test_match_ranges() {
        assert_eq!(match_ranges("Hasta Hakları", "ha"), vec![(0, 2), (6, 8)]);
        assert!(match_ranges("Hasta", "  ").is_empty());
        assert!(match_ranges("ab", "abc").is_empty());
        assert_eq!(match_ranges("İzmir Güvenlik", "iz"), vec![(0, 2)]);
        assert_eq!(match_ranges("İzmir Güvenlik", "guv"), vec![(6, 9)]);
    }

    #[test]
    fn test_split_highlight_clamps() {
        assert_eq!(
            split_highlight("ab", &[(1, 10)]),
            vec![("a".to_string(), false), ("b".to_string(), true)]
        );
        assert!(split_highlight("", &[(0, 2)]).is_empty());
    }
}
