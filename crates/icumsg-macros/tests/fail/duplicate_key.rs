use icumsg::messages;

messages! {
    en {
        hello = "Hello";
        hello = "Hi";
    }
}

fn main() {}
