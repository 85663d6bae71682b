use crate::shared::components::ui::StatusBadge;
use crate::shared::icons::icon;
use crate::shared::number_format::format_opt_weight;
use contracts::domain::a006_mapping::{NodeKind, TreeLine};
use leptos::prelude::*;

const INDENT_PX: u32 = 20;

pub fn kind_class(kind: NodeKind) -> &'static str {
    match kind {
        NodeKind::Model => "tree-node--model",
        NodeKind::Dimension => "tree-node--dimension",
        NodeKind::Criterion => "tree-node--criterion",
        NodeKind::Indicator => "tree-node--indicator",
    }
}

/// "2 boyut · 5 kriter · 14 gösterge"
pub fn line_counts(line: &TreeLine) -> String {
    [
        (line.dimension_count, "boyut"),
        (line.criterion_count, "kriter"),
        (line.indicator_count, "gösterge"),
    ]
    .iter()
    .filter_map(|(count, noun)| count.map(|c| format!("{} {}", c, noun)))
    .collect::<Vec<_>>()
    .join(" · ")
}

/// Одна строка дерева
#[component]
pub fn TreeLineRow(line: TreeLine, on_toggle: Callback<String>) -> impl IntoView {
    let counts = line_counts(&line);
    let weight = (line.kind != NodeKind::Model).then(|| format_opt_weight(line.weight));
    let key = line.key.clone();
    let padding = format!("padding-left: {}px;", u32::from(line.depth) * INDENT_PX);

    let toggle = if line.expandable {
        view! {
            <button
                class="tree-node__toggle"
                title=if line.expanded { "Daralt" } else { "Genişlet" }
                on:click=move |_| on_toggle.run(key.clone())
            >
                {icon(if line.expanded { "chevron-down" } else { "chevron-right" })}
            </button>
        }
        .into_any()
    } else {
        view! { <span class="tree-node__toggle tree-node__toggle--leaf"></span> }.into_any()
    };

    view! {
        <div class=format!("tree-node {}", kind_class(line.kind)) style=padding>
            {toggle}
            <span class="tree-node__kind">{line.kind.label()}</span>
            <span class="tree-node__name" title=format!("#{}", line.id)>{line.name}</span>
            <StatusBadge status=line.status />
            {(!counts.is_empty()).then(|| view! { <span class="tree-node__counts">{counts}</span> })}
            {weight.map(|w| view! { <span class="tree-node__weight">"Ağırlık: " {w}</span> })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::StatusCode;

    fn line(kind: NodeKind) -> TreeLine {
        TreeLine {
            key: "m-1".into(),
            depth: 0,
            kind,
            id: 1,
            name: "Klasik".into(),
            status: StatusCode::Active,
            dimension_count: None,
            criterion_count: None,
            indicator_count: None,
            weight: None,
            expandable: false,
            expanded: false,
        }
    }

    #[test]
    fn test_line_counts() {
        let mut model = line(NodeKind::Model);
        model.dimension_count = Some(2);
        model.criterion_count = Some(5);
        model.indicator_count = Some(14);
        assert_eq!(line_counts(&model), "2 boyut · 5 kriter · 14 gösterge");

        let mut flat = line(NodeKind::Dimension);
        flat.indicator_count = Some(3);
        assert_eq!(line_counts(&flat), "3 gösterge");

        assert_eq!(line_counts(&line(NodeKind::Indicator)), "");
    }
}
