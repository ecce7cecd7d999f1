use anyhow::Result;
use figdroid::design::source::sample_document;
use figdroid::transpiler::types::WidgetKind;
use figdroid::transpiler::{ComponentTree, ConvertError, normalize, Normalizer};
use figdroid::RawDocument;
use pretty_assertions::assert_eq;

const NESTED_EXPORT: &str = r#"
{
  "name": "Checkout",
  "document": {
    "id": "0:0",
    "name": "Document",
    "type": "DOCUMENT",
    "children": [
      {
        "id": "2:1",
        "name": "Checkout Screen",
        "type": "FRAME",
        "absoluteBoundingBox": { "x": 0, "y": 0, "width": 360, "height": 800 },
        "fills": [{ "type": "SOLID", "opacity": 0.5, "color": { "r": 1, "g": 1, "b": 1, "a": 1 } }],
        "children": [
          {
            "id": "2:2",
            "name": "Hidden Promo",
            "type": "GROUP",
            "visible": false,
            "absoluteBoundingBox": { "x": 0, "y": 0, "width": 360, "height": 120 },
            "children": [
              {
                "id": "2:3",
                "name": "Promo Text",
                "type": "TEXT",
                "absoluteBoundingBox": { "x": 16, "y": 16, "width": 200, "height": 20 },
                "characters": "50% off"
              }
            ]
          },
          {
            "id": "2:4",
            "name": "Summary",
            "type": "GROUP",
            "absoluteBoundingBox": { "x": 16, "y": 140, "width": 328, "height": 200 },
            "children": [
              {
                "id": "2:5",
                "name": "Total",
                "type": "TEXT",
                "absoluteBoundingBox": { "x": 24, "y": 150, "width": 120, "height": "24" },
                "characters": "Total: $42",
                "style": { "fontSize": 18, "fontWeight": 400, "textAlignHorizontal": "RIGHT" }
              },
              {
                "id": "2:6",
                "name": "Card Logo",
                "type": "VECTOR",
                "absoluteBoundingBox": { "x": 280, "y": 150, "width": 48, "height": 32 }
              }
            ]
          }
        ]
      }
    ]
  }
}
"#;

#[test]
fn test_invisible_subtrees_are_dropped() -> Result<()> {
    let document = RawDocument::from_json(NESTED_EXPORT)?;
    let components = normalize(&document)?;

    let ids: Vec<_> = components.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["2:1", "2:4", "2:5", "2:6"]);
    Ok(())
}

#[test]
fn test_parents_precede_children() -> Result<()> {
    let document = RawDocument::from_json(NESTED_EXPORT)?;
    let components = normalize(&document)?;

    for (index, component) in components.iter().enumerate() {
        if let Some(parent_id) = &component.parent_id {
            let parent_index = components
                .iter()
                .position(|c| &c.id == parent_id)
                .expect("parent present");
            assert!(parent_index < index, "{} listed before its parent", component.id);
        }
    }

    let tree = ComponentTree::new(&components);
    assert_eq!(tree.roots().count(), 1);
    Ok(())
}

#[test]
fn test_kinds_and_properties() -> Result<()> {
    let document = RawDocument::from_json(NESTED_EXPORT)?;
    let components = normalize(&document)?;

    let screen = &components[0];
    assert_eq!(screen.name, "checkout_screen");
    assert_eq!(screen.widget_kind, WidgetKind::Container);
    assert_eq!(screen.properties.background().as_deref(), Some("#80ffffff"));

    let summary = &components[1];
    assert_eq!(summary.widget_kind, WidgetKind::LinearStack);
    assert_eq!(summary.parent_id.as_deref(), Some("2:1"));

    let total = &components[2];
    assert_eq!(total.widget_kind, WidgetKind::TextView);
    assert_eq!(total.bounds.width, Some(120.0));
    assert_eq!(total.bounds.height, None);
    assert_eq!(total.properties.text.as_deref(), Some("Total: $42"));
    assert_eq!(total.properties.font_size, Some(18.0));
    assert_eq!(total.properties.text_alignment.as_deref(), Some("right"));
    assert!(!total.properties.is_bold());

    let logo = &components[3];
    assert_eq!(logo.widget_kind, WidgetKind::ImageView);
    assert_eq!(logo.properties.background(), None);
    Ok(())
}

#[test]
fn test_node_subset() -> Result<()> {
    let document = RawDocument::from_json(NESTED_EXPORT)?;
    let components = Normalizer::new().normalize_node(&document, Some("2:4"))?;

    assert_eq!(components.len(), 3);
    assert!(components[0].is_root());
    assert_eq!(components[0].name, "summary");

    let missing = Normalizer::new().normalize_node(&document, Some("9:9"));
    assert_eq!(
        missing,
        Err(ConvertError::InvalidDocument("node '9:9' not found".to_string()))
    );
    Ok(())
}

#[test]
fn test_sample_document() -> Result<()> {
    let components = normalize(&sample_document())?;

    let names: Vec<_> = components.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["login_container", "title", "username_field", "password_field", "login_button"]
    );
    assert!(components[1].properties.is_bold());
    assert_eq!(components[4].properties.background().as_deref(), Some("#3366e6"));
    Ok(())
}

#[test]
fn test_normalization_is_deterministic() -> Result<()> {
    let document = RawDocument::from_json(NESTED_EXPORT)?;
    assert_eq!(normalize(&document)?, normalize(&document)?);
    Ok(())
}
