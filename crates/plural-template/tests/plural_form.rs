//! Tests for plural categories, their ICU4X bridge, and message interchange.

use icu_locale_core::locale;
use icu_plurals::{PluralRuleType, PluralRules};
use plural_template::{FuncMap, Message, MessageTemplate, PluralForm, data};

#[test]
fn display_uses_cldr_keywords() {
    let keywords: Vec<String> = PluralForm::ALL.iter().map(ToString::to_string).collect();
    assert_eq!(keywords, ["zero", "one", "two", "few", "many", "other"]);
}

#[test]
fn unknown_keyword_is_rejected() {
    let err = "several".parse::<PluralForm>().unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"unknown plural form 'several', expected one of: zero, one, two, few, many, other"
    );
}

#[test]
fn serde_uses_lowercase_keywords() {
    assert_eq!(serde_json::to_string(&PluralForm::Many).unwrap(), r#""many""#);
    let form: PluralForm = serde_json::from_str(r#""two""#).unwrap();
    assert_eq!(form, PluralForm::Two);
}

#[test]
fn icu_categories_select_russian_variants() {
    let rules = PluralRules::try_new(locale!("ru").into(), PluralRuleType::Cardinal.into())
        .unwrap();
    let template = MessageTemplate::new(
        Message::builder()
            .id("files")
            .one("{{.Count}} файл")
            .few("{{.Count}} файла")
            .many("{{.Count}} файлов")
            .build(),
    )
    .unwrap();

    let render = |n: i64| {
        let form = PluralForm::from(rules.category_for(n));
        template
            .execute(form, &data! { "Count" => n }, &FuncMap::new())
            .unwrap()
    };
    assert_eq!(render(1), "1 файл");
    assert_eq!(render(3), "3 файла");
    assert_eq!(render(5), "5 файлов");
    assert_eq!(render(21), "21 файл");
}

// =============================================================================
// Message interchange
// =============================================================================

#[test]
fn message_deserializes_from_camel_case_keys() {
    let message: Message = serde_json::from_str(
        r#"{
            "id": "inbox",
            "description": "Unread count",
            "leftDelim": "[[",
            "rightDelim": "]]",
            "one": "[[.Count]] message",
            "other": "[[.Count]] messages"
        }"#,
    )
    .unwrap();

    assert_eq!(message.id, "inbox");
    assert_eq!(message.delimiters().left(), "[[");
    assert_eq!(message.text(PluralForm::Few), "");

    let template = MessageTemplate::new(message).unwrap();
    let out = template
        .execute(PluralForm::Other, &data! { "Count" => 4 }, &FuncMap::new())
        .unwrap();
    assert_eq!(out, "4 messages");
}

#[test]
fn message_serialization_omits_empty_fields() {
    let message = Message::builder().id("hi").other("Hello").build();
    assert_eq!(
        serde_json::to_string(&message).unwrap(),
        r#"{"id":"hi","other":"Hello"}"#
    );
}

#[test]
fn message_requires_id() {
    assert!(serde_json::from_str::<Message>(r#"{"other": "x"}"#).is_err());
}
