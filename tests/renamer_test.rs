use create_stencil_components::error::Error;
use create_stencil_components::renamer::{rename_directories, rename_files, rename_tree};
use create_stencil_components::renderer::TokenRenderer;
use create_stencil_components::variables::TemplateVariables;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn renderer() -> TokenRenderer {
    let vars: TemplateVariables = [
        ("PROJECT_NAME", "ui_kit"),
        ("PROJECT_NAME_KEBAB", "ui-kit"),
        ("PROJECT_NAME_PASCAL", "UiKit"),
    ]
    .into_iter()
    .collect();
    TokenRenderer::new(&vars).unwrap()
}

fn touch(path: &Path) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, path.file_name().unwrap().to_string_lossy().as_bytes()).unwrap();
}

#[test]
fn test_nested_tokens_resolve_at_every_level() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    touch(&root.join(
        "packages/components-{{PROJECT_NAME_KEBAB}}-core/{{PROJECT_NAME_KEBAB}}-core/{{PROJECT_NAME_PASCAL}}.module.ts",
    ));
    touch(&root.join("packages/components-{{PROJECT_NAME_KEBAB}}-core/stencil.config.ts"));

    let renamed = rename_tree(root, &renderer()).unwrap();

    assert_eq!(renamed, 3);
    let core = root.join("packages/components-ui-kit-core");
    assert!(core.join("ui-kit-core/UiKit.module.ts").is_file());
    assert!(core.join("stencil.config.ts").is_file());
    assert!(!root.join("packages/components-{{PROJECT_NAME_KEBAB}}-core").exists());
}

#[test]
fn test_directory_pass_leaves_files_alone() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    touch(&root.join("{{PROJECT_NAME}}/{{PROJECT_NAME}}.ts"));

    assert_eq!(rename_directories(root, &renderer()).unwrap(), 1);
    assert!(root.join("ui_kit/{{PROJECT_NAME}}.ts").is_file());

    assert_eq!(rename_files(root, &renderer()).unwrap(), 1);
    assert!(root.join("ui_kit/ui_kit.ts").is_file());
}

#[test]
fn test_untokenized_names_are_untouched() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    touch(&root.join("src/{{UNKNOWN}}.ts"));
    touch(&root.join("src/index.ts"));

    assert_eq!(rename_tree(root, &renderer()).unwrap(), 0);
    assert!(root.join("src/{{UNKNOWN}}.ts").is_file());
    assert!(root.join("src/index.ts").is_file());
}

#[test]
fn test_root_is_never_renamed() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("{{PROJECT_NAME}}");
    touch(&root.join("index.ts"));

    rename_tree(&root, &renderer()).unwrap();

    assert!(root.join("index.ts").is_file());
}

#[test]
fn test_collision_is_surfaced() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    touch(&root.join("{{PROJECT_NAME_KEBAB}}.ts"));
    touch(&root.join("ui-kit.ts"));

    let err = rename_tree(root, &renderer()).unwrap_err();

    match err {
        Error::RenameCollisionError { from, to } => {
            assert!(from.ends_with("{{PROJECT_NAME_KEBAB}}.ts"));
            assert!(to.ends_with("ui-kit.ts"));
        }
        e => panic!("Expected RenameCollisionError, got {e:?}"),
    }
    // Neither file lost its content.
    assert_eq!(fs::read_to_string(root.join("ui-kit.ts")).unwrap(), "ui-kit.ts");
    assert_eq!(
        fs::read_to_string(root.join("{{PROJECT_NAME_KEBAB}}.ts")).unwrap(),
        "{{PROJECT_NAME_KEBAB}}.ts"
    );
}

#[cfg(target_os = "linux")]
#[test_log::test]
fn test_non_utf8_name_is_skipped() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    let name = OsStr::from_bytes(b"{{PROJECT_NAME_KEBAB}}-\xff.ts");
    fs::write(root.join(name), "raw").unwrap();

    let renamed = rename_tree(root, &renderer()).unwrap();

    assert_eq!(renamed, 0);
    assert_eq!(fs::read_to_string(root.join(name)).unwrap(), "raw");
}
