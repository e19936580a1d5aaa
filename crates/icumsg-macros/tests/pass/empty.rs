// Test that empty input still provides a catalog
use icumsg::messages;

messages! {}

fn main() {
    assert_eq!(catalog().locales().count(), 0);
}
