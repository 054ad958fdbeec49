use sprout::error::Error;
use sprout::materializer::{materialize, ProjectRequest};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn request(project_name: &str, identifier: &str, destination_root: &Path) -> ProjectRequest {
    ProjectRequest {
        project_name: project_name.to_string(),
        template_identifier: identifier.to_string(),
        template_ref: None,
        destination_root: destination_root.to_path_buf(),
    }
}

fn setup_template(install_root: &Path, name: &str) -> PathBuf {
    let template_dir = install_root.join("templates").join(name);
    fs::create_dir_all(&template_dir).unwrap();
    template_dir
}

#[test]
fn test_materialize_copies_the_template_tree() {
    let install_root = TempDir::new().unwrap();
    let destination_root = TempDir::new().unwrap();
    let template_dir = setup_template(install_root.path(), "static");
    fs::write(template_dir.join("index.html"), "<h1>Static</h1>\n").unwrap();
    fs::create_dir_all(template_dir.join("assets/css")).unwrap();
    fs::write(template_dir.join("assets/css/style.css"), "body {}\n").unwrap();

    let request = request("demo", "static", destination_root.path());
    let result = materialize(&request, install_root.path()).unwrap();

    assert_eq!(result.destination_path, destination_root.path().join("demo"));
    assert!(result.succeeded);
    assert!(!result.dependencies_installed);
    assert!(!dir_diff::is_different(&template_dir, &result.destination_path).unwrap());
    assert_eq!(
        fs::read_to_string(result.destination_path.join("index.html")).unwrap(),
        "<h1>Static</h1>\n"
    );
    assert_eq!(
        fs::read_to_string(result.destination_path.join("assets/css/style.css")).unwrap(),
        "body {}\n"
    );
}

#[test]
fn test_empty_template_materializes_empty_project() {
    let install_root = TempDir::new().unwrap();
    let destination_root = TempDir::new().unwrap();
    setup_template(install_root.path(), "blank");

    let request = request("demo", "blank", destination_root.path());
    let result = materialize(&request, install_root.path()).unwrap();

    assert!(result.destination_path.is_dir());
    assert_eq!(fs::read_dir(&result.destination_path).unwrap().count(), 0);
}

#[test]
fn test_existing_destination_is_left_untouched() {
    let install_root = TempDir::new().unwrap();
    let destination_root = TempDir::new().unwrap();
    setup_template(install_root.path(), "static");
    let existing = destination_root.path().join("demo");
    fs::create_dir(&existing).unwrap();
    fs::write(existing.join("precious.txt"), "keep me").unwrap();

    let request = request("demo", "static", destination_root.path());
    let result = materialize(&request, install_root.path());

    match result {
        Err(Error::DestinationExistsError { destination }) => {
            assert!(destination.ends_with("demo"))
        }
        other => panic!("expected DestinationExistsError, got {:?}", other),
    }
    assert_eq!(
        fs::read_to_string(existing.join("precious.txt")).unwrap(),
        "keep me"
    );
    assert_eq!(fs::read_dir(&existing).unwrap().count(), 1);
}

#[test]
fn test_missing_template_rolls_the_destination_back() {
    let install_root = TempDir::new().unwrap();
    let destination_root = TempDir::new().unwrap();
    fs::create_dir_all(install_root.path().join("templates")).unwrap();

    let request = request("demo", "absent", destination_root.path());
    let result = materialize(&request, install_root.path());

    match result {
        Err(Error::TemplateNotFoundError { template_dir }) => {
            assert!(template_dir.ends_with("absent"))
        }
        other => panic!("expected TemplateNotFoundError, got {:?}", other),
    }
    assert!(!destination_root.path().join("demo").exists());
}

#[test]
fn test_ref_names_the_template_directory() {
    let install_root = TempDir::new().unwrap();
    let destination_root = TempDir::new().unwrap();
    let ref_dir = setup_template(install_root.path(), "portal-lite");
    fs::write(ref_dir.join("portal.html"), "<h1>Lite</h1>\n").unwrap();

    let mut request = request("demo", "portal", destination_root.path());
    request.template_ref = Some("portal-lite".to_string());
    let result = materialize(&request, install_root.path()).unwrap();

    assert_eq!(
        fs::read_to_string(result.destination_path.join("portal.html")).unwrap(),
        "<h1>Lite</h1>\n"
    );
}

#[test]
fn test_file_as_template_is_not_found() {
    let install_root = TempDir::new().unwrap();
    let destination_root = TempDir::new().unwrap();
    let templates = install_root.path().join("templates");
    fs::create_dir_all(&templates).unwrap();
    fs::write(templates.join("static"), "not a directory").unwrap();

    let request = request("demo", "static", destination_root.path());
    let result = materialize(&request, install_root.path());

    assert!(matches!(result, Err(Error::TemplateNotFoundError { .. })));
    assert!(!destination_root.path().join("demo").exists());
}

#[test]
fn test_missing_destination_root_is_a_create_error() {
    let install_root = TempDir::new().unwrap();
    let destination_root = TempDir::new().unwrap();
    setup_template(install_root.path(), "static");
    let missing_root = destination_root.path().join("no/such/root");

    let request = request("demo", "static", &missing_root);
    let result = materialize(&request, install_root.path());

    assert!(matches!(result, Err(Error::DirectoryCreateError { .. })));
}

#[cfg(unix)]
#[test]
fn test_copy_failure_rolls_the_destination_back() {
    let install_root = TempDir::new().unwrap();
    let destination_root = TempDir::new().unwrap();
    let template_dir = setup_template(install_root.path(), "broken");
    fs::write(template_dir.join("good.txt"), "fine").unwrap();
    // A dangling symlink makes the file copy fail partway through.
    std::os::unix::fs::symlink("/nonexistent/target", template_dir.join("dangling")).unwrap();

    let request = request("demo", "broken", destination_root.path());
    let result = materialize(&request, install_root.path());

    assert!(matches!(result, Err(Error::CopyFailed(_))));
    assert!(!destination_root.path().join("demo").exists());
}
