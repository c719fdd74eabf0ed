
use super::Transliterator;

fn tr(input: &str) -> String {
    Transliterator::default().translate_str(input)
}
