// Test nested branches, escapes and literal braces
use icumsg::{TracingSink, messages, values};

messages! {
    en {
        status = "{userType, select, admin{{count, plural, =1{Admin, 1 message} other{Admin, # messages}}} member{{count, plural, =1{Member, 1 message} other{Member, # messages}}} other{Guest}}";
        special = "Today is '{'special'}' and you have {count, plural, =1{# cat} other{# cats}}";
        quotes = "'''''' '{}'";
        summary = "{count, plural, =0{no items} =1{one item} other{# items}} and {gender, select, male{sir} other{friend}}";
        quoted = "say \"{word}\"\n";
    }
}

fn main() {
    let v = values! { "userType" => "member", "count" => 3 };
    assert_eq!(en::status(&v, &mut TracingSink), "Member, 3 messages");
    assert_eq!(
        en::special(&values! { "count" => 2 }, &mut TracingSink),
        "Today is {special} and you have 2 cats"
    );
    assert_eq!(en::quotes(&values! {}, &mut TracingSink), "''' {}");
    assert_eq!(
        en::summary(&values! { "count" => 0, "gender" => "male" }, &mut TracingSink),
        "no items and sir"
    );
    assert_eq!(en::quoted(&values! { "word" => "hi" }, &mut TracingSink), "say \"hi\"\n");
}
