use crate::application::ports::util::SlugGenerator;
use slug::slugify;

/// Turns titles into hyphenated lowercase URL id suggestions.
#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        slugify(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggestions_use_hyphens_instead_of_spaces() {
        let generator = DefaultSlugGenerator;
        assert_eq!(generator.slugify("My First Article!"), "my-first-article");
    }
}
