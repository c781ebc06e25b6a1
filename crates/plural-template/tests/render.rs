//! Integration tests for rendering parsed templates.

use std::collections::BTreeMap;

use plural_template::interpreter::render;
use plural_template::parser::parse_template;
use plural_template::{
    Data, Delimiters, Escaping, FuncMap, HtmlParser, Parser, RenderError, TextParser, Value, data,
};

fn render_text(src: &str, data: &dyn Data) -> Result<String, RenderError> {
    let template = parse_template(src, &Delimiters::default()).unwrap();
    TextParser::new().render(&template, data)
}

fn user() -> Value {
    Value::Map(BTreeMap::from([
        ("Name".to_string(), Value::from("Ada")),
        (
            "Address".to_string(),
            Value::Map(BTreeMap::from([("City".to_string(), Value::from("London"))])),
        ),
    ]))
}

// =============================================================================
// Field resolution
// =============================================================================

#[test]
fn render_literal_only() {
    assert_eq!(render_text("Hello!", &()).unwrap(), "Hello!");
}

#[test]
fn render_top_level_field() {
    let d = data! { "Count" => 3 };
    assert_eq!(render_text("{{.Count}} new", &d).unwrap(), "3 new");
}

#[test]
fn render_nested_field() {
    let d = data! { "User" => user() };
    assert_eq!(
        render_text("{{.User.Name}} of {{.User.Address.City}}", &d).unwrap(),
        "Ada of London"
    );
}

#[test]
fn render_root_of_value_payload() {
    assert_eq!(render_text("[{{.}}]", &Value::from(7)).unwrap(), "[7]");
}

#[test]
fn render_root_without_root_value_fails() {
    let d = data! { "Count" => 1 };
    assert_eq!(render_text("{{.}}", &d), Err(RenderError::MissingRoot));
}

#[test]
fn render_btree_payload() {
    let d = BTreeMap::from([("Name".to_string(), Value::from("Bo"))]);
    assert_eq!(render_text("hi {{.Name}}", &d).unwrap(), "hi Bo");
}

#[test]
fn render_value_map_payload() {
    assert_eq!(render_text("{{.Name}}", &user()).unwrap(), "Ada");
}

#[test]
fn render_list_and_float_display() {
    let d = data! { "Tags" => vec!["a", "b"], "Ratio" => 0.5 };
    assert_eq!(render_text("{{.Tags}} {{.Ratio}}", &d).unwrap(), "[a b] 0.5");
}

#[test]
fn render_missing_field() {
    let d = data! { "Count" => 1 };
    let err = render_text("{{.Total}}", &d).unwrap_err();
    assert_eq!(
        err,
        RenderError::MissingField {
            path: ".Total".into()
        }
    );
}

#[test]
fn render_missing_nested_field_reports_full_path() {
    let d = data! { "User" => user() };
    let err = render_text("{{.User.Address.Zip}}", &d).unwrap_err();
    assert_eq!(
        err,
        RenderError::MissingField {
            path: ".User.Address.Zip".into()
        }
    );
}

#[test]
fn render_field_of_non_map() {
    let d = data! { "Count" => 1 };
    let err = render_text("{{.Count.Value}}", &d).unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"cannot read field '.Count.Value' of number value");
}

// =============================================================================
// Functions and pipelines
// =============================================================================

#[test]
fn render_builtin_call() {
    let d = data! { "Name" => "ada" };
    assert_eq!(render_text("{{upper .Name}}", &d).unwrap(), "ADA");
}

#[test]
fn render_pipeline_passes_value_last() {
    let d = data! { "Name" => "Ada" };
    assert_eq!(
        render_text(r#"{{.Name | print "by "}}"#, &d).unwrap(),
        "by Ada"
    );
}

#[test]
fn render_len_of_list() {
    let d = data! { "Items" => vec![1, 2, 3] };
    assert_eq!(render_text("{{.Items | len}}", &d).unwrap(), "3");
}

#[test]
fn render_literal_operands() {
    assert_eq!(
        render_text(r#"{{print 1 2}} {{true}} {{`raw`}}"#, &()).unwrap(),
        "1 2 true raw"
    );
}

#[test]
fn render_unknown_function_suggests_close_names() {
    let err = render_text("{{uper .Name}}", &data! { "Name" => "x" }).unwrap_err();
    assert_eq!(
        err,
        RenderError::UnknownFunction {
            name: "uper".into(),
            suggestions: vec!["upper".into()],
        }
    );
    insta::assert_snapshot!(err.to_string(), @"function 'uper' not defined, did you mean: upper?");
}

#[test]
fn render_non_function_pipeline_stage() {
    let d = data! { "A" => 1, "B" => 2 };
    let err = render_text("{{.A | .B}}", &d).unwrap_err();
    assert_eq!(err, RenderError::NonFunctionStage { stage: 2 });
}

#[test]
fn render_function_failure() {
    let err = render_text("{{len 5}}", &()).unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"error calling 'len': len of number value");
}

#[test]
fn caller_functions_shadow_builtins() {
    let funcs = FuncMap::new().with("upper", |_| Ok(Value::from("shadowed")));
    let template = parse_template("{{upper .Name}}", &Delimiters::default()).unwrap();
    let out = TextParser::with_funcs(funcs)
        .render(&template, &data! { "Name" => "x" })
        .unwrap();
    assert_eq!(out, "shadowed");
}

#[test]
fn caller_functions_can_capture_state() {
    let currency = String::from("EUR");
    let funcs = FuncMap::new().with("price", move |args| {
        Ok(Value::from(format!("{} {currency}", args[0])))
    });
    let template = parse_template("{{.Total | price}}", &Delimiters::default()).unwrap();
    let out = TextParser::with_funcs(funcs)
        .render(&template, &data! { "Total" => 12 })
        .unwrap();
    assert_eq!(out, "12 EUR");
}

#[test]
fn builtins_can_be_disabled() {
    let parser = TextParser::builder().builtins(false).build();
    let template = parse_template("{{upper .Name}}", &Delimiters::default()).unwrap();
    let err = parser.render(&template, &data! { "Name" => "x" }).unwrap_err();
    assert!(matches!(err, RenderError::UnknownFunction { .. }));
}

// =============================================================================
// Escaping
// =============================================================================

#[test]
fn html_parser_escapes_action_output_only() {
    let template = parse_template("<b>{{.Name}}</b>", &Delimiters::default()).unwrap();
    let out = HtmlParser::new()
        .render(&template, &data! { "Name" => "<script>" })
        .unwrap();
    assert_eq!(out, "<b>&lt;script&gt;</b>");
}

#[test]
fn render_function_with_explicit_escaping() {
    let template = parse_template("{{.A}} & {{.B}}", &Delimiters::default()).unwrap();
    let d = data! { "A" => "x<y", "B" => "'q'" };
    let out = render(&template, &d, &[&FuncMap::builtins()], Escaping::Html).unwrap();
    assert_eq!(out, "x&lt;y & &#39;q&#39;");
}
