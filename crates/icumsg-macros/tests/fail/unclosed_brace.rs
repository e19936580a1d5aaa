use icumsg::messages;

messages! {
    en {
        hello = "Hello {name";
    }
}

fn main() {}
