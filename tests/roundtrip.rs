//! Round-trip integration tests for the decompose/compose pair
//!
//! These tests verify the central property of the tool: separating a
//! canonical profile document and combining the result reproduces the
//! same set of top-level elements, ignoring formatting and ordering
//! within a tag group.

use std::fs;
use std::path::Path;

use sfprofiles::compose::compose_directory;
use sfprofiles::decompose::decompose_directory;
use sfprofiles::writer::document_string;
use xot::Xot;

const CANONICAL: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<Profile xmlns="http://soap.sforce.com/2006/04/metadata">
    <custom>true</custom>
    <userLicense>Salesforce</userLicense>
    <applicationVisibilities>
        <application>standard__Sales</application>
        <default>true</default>
        <visible>true</visible>
    </applicationVisibilities>
    <fieldPermissions>
        <editable>true</editable>
        <field>Account.Industry</field>
        <readable>true</readable>
    </fieldPermissions>
    <fieldPermissions>
        <editable>false</editable>
        <field>Account.Rating</field>
        <readable>true</readable>
    </fieldPermissions>
    <objectPermissions>
        <allowCreate>true</allowCreate>
        <allowDelete>false</allowDelete>
        <object>Account</object>
    </objectPermissions>
    <tabVisibilities>
        <tab>standard-Account</tab>
        <visibility>DefaultOn</visibility>
    </tabVisibilities>
</Profile>"#;

/// Serialize every top-level element of a canonical document on its own,
/// sorted, so documents can be compared independent of element order.
fn normalized_elements(source: &str) -> Vec<String> {
    let mut xot = Xot::new();
    let doc = xot.parse(source).unwrap();
    let root = xot.document_element(doc).unwrap();
    let mut elements: Vec<String> = xot
        .children(root)
        .filter(|&child| xot.element(child).is_some())
        .map(|child| document_string(&xot, child, None))
        .collect();
    elements.sort();
    elements
}

fn write_profile(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(format!("{name}.profile-meta.xml")), contents).unwrap();
}

#[test]
fn test_separate_then_combine_is_identity_on_content() {
    let dir = tempfile::tempdir().unwrap();
    write_profile(dir.path(), "Admin", CANONICAL);

    decompose_directory(dir.path()).unwrap();
    compose_directory(dir.path(), None).unwrap();

    let combined = fs::read_to_string(dir.path().join("Admin.profile-meta.xml")).unwrap();
    assert_eq!(normalized_elements(&combined), normalized_elements(CANONICAL));
}

#[test]
fn test_round_trip_twice_is_byte_stable() {
    let dir = tempfile::tempdir().unwrap();
    write_profile(dir.path(), "Admin", CANONICAL);

    decompose_directory(dir.path()).unwrap();
    compose_directory(dir.path(), None).unwrap();
    let first = fs::read_to_string(dir.path().join("Admin.profile-meta.xml")).unwrap();

    // The combined output is itself a canonical document; running the
    // whole cycle on it again must reproduce it byte for byte.
    decompose_directory(dir.path()).unwrap();
    compose_directory(dir.path(), None).unwrap();
    let second = fs::read_to_string(dir.path().join("Admin.profile-meta.xml")).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_round_trip_multiple_profiles_stay_independent() {
    let dir = tempfile::tempdir().unwrap();
    write_profile(dir.path(), "Admin", CANONICAL);
    write_profile(
        dir.path(),
        "Standard",
        r#"<?xml version="1.0" encoding="UTF-8"?>
<Profile xmlns="http://soap.sforce.com/2006/04/metadata">
    <custom>false</custom>
    <recordTypeVisibilities>
        <default>true</default>
        <recordType>Account.Business</recordType>
        <visible>true</visible>
    </recordTypeVisibilities>
</Profile>"#,
    );

    decompose_directory(dir.path()).unwrap();
    compose_directory(dir.path(), None).unwrap();

    let admin = fs::read_to_string(dir.path().join("Admin.profile-meta.xml")).unwrap();
    let standard = fs::read_to_string(dir.path().join("Standard.profile-meta.xml")).unwrap();
    assert!(admin.contains("<object>Account</object>"));
    assert!(!admin.contains("recordTypeVisibilities"));
    assert!(standard.contains("<recordType>Account.Business</recordType>"));
    assert!(standard.contains("<custom>false</custom>"));
}

#[test]
fn test_scalar_edits_in_fragments_survive_the_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    write_profile(dir.path(), "Admin", CANONICAL);
    decompose_directory(dir.path()).unwrap();

    // Simulate a contributor editing one fragment file in place.
    let fragment = dir
        .path()
        .join("Admin/fieldPermissions/Account.Industry.fieldPermissions-meta.xml");
    let edited = fs::read_to_string(&fragment)
        .unwrap()
        .replace("<editable>true</editable>", "<editable>false</editable>");
    fs::write(&fragment, edited).unwrap();

    compose_directory(dir.path(), None).unwrap();
    let combined = fs::read_to_string(dir.path().join("Admin.profile-meta.xml")).unwrap();
    // Account.Industry was the only editable field, so no fragment
    // contributes an <editable>true</editable> any more.
    assert!(!combined.contains("<editable>true</editable>"));
    assert!(combined.contains("<field>Account.Industry</field>"));
}
