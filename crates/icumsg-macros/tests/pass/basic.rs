// Test basic macro usage compiles and renders
use icumsg::{Catalog, DiagnosticCollector, TracingSink, TranslationEntry, messages, values};

messages! {
    en {
        hello = "Hello, world!";
        greet = "Hello, {name}!";
        apples = "You have {count, plural, =1{# apple} other{# apples}}";
    }
    de {
        hello = "Hallo, Welt!";
        greet = "Hallo, {name}!";
    }
}

fn main() {
    assert_eq!(en::hello(&values! {}, &mut TracingSink), "Hello, world!");
    assert_eq!(en::greet(&values! { "name" => "Ada" }, &mut TracingSink), "Hello, Ada!");
    assert_eq!(de::greet(&values! { "name" => "Ada" }, &mut TracingSink), "Hallo, Ada!");
    assert_eq!(en::apples(&values! { "count" => 1 }, &mut TracingSink), "You have 1 apple");
    assert_eq!(en::apples(&values! { "count" => 3 }, &mut TracingSink), "You have 3 apples");

    let catalog: Catalog = catalog();
    assert!(matches!(catalog.get("en", "hello"), Some(TranslationEntry::Text(_))));
    assert!(matches!(catalog.get("de", "greet"), Some(TranslationEntry::Function(_))));
    assert!(catalog.get("de", "apples").is_none());

    let mut collector = DiagnosticCollector::new();
    assert_eq!(en::greet(&values! {}, &mut collector), "Hello, {name}!");
    assert_eq!(collector.diagnostics().len(), 1);
}
