use contracts::enums::StatusCode;
use leptos::prelude::*;

/// Badge component with different variants
#[component]
pub fn Badge(
    /// Badge variant: "primary", "success", "warning", "error", "neutral" (default)
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("neutral") {
        "primary" => "badge--primary",
        "success" => "badge--success",
        "warning" => "badge--warning",
        "error" => "badge--error",
        _ => "badge--neutral",
    };

    view! {
        <span class=move || format!("badge {}", variant_class())>
            {children()}
        </span>
    }
}

/// CSS modifier of a record status
pub fn status_variant(status: StatusCode) -> &'static str {
    match status {
        StatusCode::Active => "success",
        StatusCode::Draft => "warning",
        StatusCode::Passive => "neutral",
    }
}

/// Aktif / Taslak / Pasif
#[component]
pub fn StatusBadge(status: StatusCode) -> impl IntoView {
    view! {
        <span class=format!("badge badge--status badge--{}", status_variant(status))>
            {status.label()}
        </span>
    }
}
