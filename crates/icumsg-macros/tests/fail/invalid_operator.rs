use icumsg::messages;

messages! {
    en {
        count = "{n, plurl, other{#}}";
    }
}

fn main() {}
