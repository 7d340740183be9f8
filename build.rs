use std::collections::HashMap;
use std::path::Path;

fn main() {
    let catalog_path = Path::new("catalogs/supplications.json");
    validate_catalog_file(catalog_path);
    set_build_dependencies();
}

fn validate_catalog_file(catalog_path: &Path) {
    // Ensure catalog exists at build time
    assert!(
        catalog_path.exists(),
        "\n\nCATALOG BUILD ERROR: File not found\n\
         Path: {}\n\
         Please create the catalog file before building.\n",
        catalog_path.display()
    );

    let catalog_contents = std::fs::read_to_string(catalog_path).unwrap_or_else(|e| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Failed to read file\n\
             Path: {}\n\
             Error: {e}\n",
            catalog_path.display()
        );
    });

    let catalog: serde_json::Value = serde_json::from_str(&catalog_contents).unwrap_or_else(|e| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Invalid JSON\n\
             Path: {}\n\
             Error: {e}\n\
             Hint: Check for missing commas, brackets, or invalid syntax.\n",
            catalog_path.display()
        );
    });

    validate_catalog_structure(&catalog);
}

fn validate_catalog_structure(catalog: &serde_json::Value) {
    assert!(
        catalog.is_object(),
        "\n\nCATALOG BUILD ERROR: Root must be a JSON object\n"
    );

    let categories = catalog.get("categories").unwrap_or_else(|| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Missing 'categories' field\n\
             The catalog must have a top-level 'categories' array.\n"
        );
    });

    let cats = categories.as_array().unwrap_or_else(|| {
        panic!("\n\nCATALOG BUILD ERROR: 'categories' must be an array\n");
    });

    let total_entries = validate_categories(cats);

    println!(
        "cargo:warning=Validated catalog: {} categories, {total_entries} total entries",
        cats.len()
    );
}

fn validate_categories(cats: &[serde_json::Value]) -> usize {
    let mut total_entries = 0;
    let mut category_ids: HashMap<&str, usize> = HashMap::new();
    let mut entry_ids: HashMap<&str, &str> = HashMap::new();

    for (i, category) in cats.iter().enumerate() {
        let cat_id = required_str(category, "id", &format!("category at index {i}"));
        for field in ["nameNative", "nameSecondary"] {
            required_str(category, field, &format!("category '{cat_id}'"));
        }

        if let Some(first) = category_ids.insert(cat_id, i) {
            panic!(
                "\n\nCATALOG BUILD ERROR: Duplicate category id '{cat_id}' at indices {first} and {i}\n"
            );
        }

        let entries = category
            .get("entries")
            .and_then(serde_json::Value::as_array)
            .unwrap_or_else(|| {
                panic!("\n\nCATALOG BUILD ERROR: Category '{cat_id}' missing 'entries' array\n");
            });
        assert!(
            !entries.is_empty(),
            "\n\nCATALOG BUILD ERROR: Category '{cat_id}' has no entries\n"
        );

        for (j, entry) in entries.iter().enumerate() {
            let context = format!("category '{cat_id}' entry {j}");
            let entry_id = required_str(entry, "id", &context);
            for field in ["primaryScript", "translationNative", "translationSecondary"] {
                required_str(entry, field, &format!("entry '{entry_id}'"));
            }
            if let Some(owner) = entry_ids.insert(entry_id, cat_id) {
                panic!(
                    "\n\nCATALOG BUILD ERROR: Duplicate entry id '{entry_id}' in categories '{owner}' and '{cat_id}'\n\
                     Entry ids must be unique across the whole catalog.\n"
                );
            }
        }
        total_entries += entries.len();
    }

    total_entries
}

fn required_str<'a>(value: &'a serde_json::Value, field: &str, context: &str) -> &'a str {
    let s = value
        .get(field)
        .and_then(serde_json::Value::as_str)
        .unwrap_or_else(|| {
            panic!("\n\nCATALOG BUILD ERROR: {context} missing string field '{field}'\n");
        });
    assert!(
        !s.trim().is_empty(),
        "\n\nCATALOG BUILD ERROR: {context} has empty '{field}'\n"
    );
    s
}

fn set_build_dependencies() {
    // Tell cargo to rerun if catalog changes
    println!("cargo:rerun-if-changed=catalogs/supplications.json");

    // Tell cargo to rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
