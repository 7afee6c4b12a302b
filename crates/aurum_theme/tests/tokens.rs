use aurum_theme::{
    build_theme, get_tokens, project, schema, stylesheet, MemoryStorage, ThemeContext, ThemeError,
    ThemeMode, ThemeSettings, TokenGroup, TokenSeed, TokenTable, TOKEN_COUNT,
};
use pretty_assertions::assert_eq;

#[test]
fn both_modes_populate_the_full_schema() {
    for mode in ThemeMode::ALL {
        let tokens = get_tokens(mode);
        for group in TokenGroup::ALL {
            let keys: Vec<&str> = tokens
                .entries()
                .iter()
                .filter(|entry| entry.group == group)
                .map(|entry| entry.key)
                .collect();
            assert_eq!(keys, group.keys().to_vec(), "{mode} {group}");
        }
    }
}

#[test]
fn variable_names_are_stable_across_modes() {
    let light = project(get_tokens(ThemeMode::Light)).unwrap();
    let dark = project(get_tokens(ThemeMode::Dark)).unwrap();

    assert_eq!(light.len(), TOKEN_COUNT);
    assert_eq!(dark.len(), TOKEN_COUNT);
    assert_eq!(
        light.keys().collect::<Vec<_>>(),
        dark.keys().collect::<Vec<_>>()
    );
    assert_ne!(light, dark);
}

#[test]
fn stylesheet_blocks_share_variable_names() {
    let css = stylesheet(TokenTable::builtin(), ThemeMode::Dark).unwrap();
    let blocks: Vec<&str> = css.split("\n\n").collect();
    assert_eq!(blocks.len(), 3);

    let names = |block: &str| {
        block
            .lines()
            .filter_map(|line| line.trim().split_once(':'))
            .map(|(name, _)| name.to_string())
            .filter(|name| name.starts_with("--"))
            .collect::<Vec<_>>()
    };
    let expected: Vec<String> = project(get_tokens(ThemeMode::Dark))
        .unwrap()
        .into_keys()
        .collect();
    for block in &blocks {
        assert_eq!(names(block), expected);
    }
    assert!(blocks[1].starts_with(":root[data-theme=\"light\"]"));
    assert!(blocks[2].starts_with(":root[data-theme=\"dark\"]"));
}

#[test]
fn token_file_feeds_the_context() {
    let seed = TokenSeed::default().with_brand_hue(300.0);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tokens.toml");
    let src = TokenTable::from_seed(&seed).to_toml_string().unwrap();
    std::fs::write(&path, src).unwrap();

    let table = TokenTable::from_file(&path).unwrap();
    let ctx = ThemeContext::with_table(table, MemoryStorage::new(), ThemeSettings::default()).unwrap();
    assert_eq!(ctx.tokens().text.brand.h, 300.0);
    assert_eq!(
        ctx.variables()["--text-brand"],
        seed.derive(ThemeMode::Dark).text.brand.to_css()
    );
}

#[test]
fn token_file_with_extra_key_is_rejected() {
    let src = TokenTable::builtin()
        .to_toml_string()
        .unwrap()
        .replace("[dark.text]\n", "[dark.text]\nlink = \"oklch(70% 0.1 250)\"\n");
    assert!(matches!(
        TokenTable::from_toml_str(&src),
        Err(ThemeError::Schema(_))
    ));
}

#[test]
fn derived_tables_keep_text_readable() {
    for hue in [0.0, 90.0, 190.0, 300.0] {
        let seed = TokenSeed {
            neutral_hue: hue,
            ..TokenSeed::default().with_brand_hue(hue)
        };
        let table = TokenTable::from_seed(&seed);
        for mode in ThemeMode::ALL {
            let tokens = table.for_mode(mode);
            let page = tokens.surface.page;
            assert!(tokens.text.primary.contrast_ratio(page) >= 4.5, "{hue} {mode}");
            assert!(tokens.text.secondary.contrast_ratio(page) >= 4.5, "{hue} {mode}");
        }
    }
}

#[test]
fn built_theme_is_deterministic_per_session() {
    let settings = ThemeSettings::default();
    assert_eq!(
        build_theme(ThemeMode::Light, &settings),
        build_theme(ThemeMode::Light, &settings)
    );
    assert_eq!(schema().count(), TOKEN_COUNT);
}
