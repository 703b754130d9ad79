//! Category display formatting

use crate::models::Category;

/// Format a simple list of categories
pub fn format_category_list(categories: &[Category]) -> String {
    if categories.is_empty() {
        return "No categories found.\n\nRun 'guard init' to create default categories."
            .to_string();
    }

    let name_width = categories
        .iter()
        .map(|c| c.name.len())
        .max()
        .unwrap_or(4)
        .max(8);

    let mut output = String::new();
    output.push_str(&format!("{:<4}  {}\n", "ID", "Category"));
    output.push_str(&format!("{:-<4}  {:-<width$}\n", "", "", width = name_width));

    for category in categories {
        output.push_str(&format!("{:<4}  {}\n", category.id, category.name));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_empty_list() {
        let output = format_category_list(&[]);
        assert!(output.contains("No categories found"));
    }

    #[test]
    fn test_format_category_list() {
        let categories = vec![Category::new(1, "Food"), Category::new(2, "Fare")];

        let output = format_category_list(&categories);
        assert!(output.contains("1     Food"));
        assert!(output.contains("2     Fare"));
    }
}
