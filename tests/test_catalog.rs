use folio::catalog::{self, CONTACT_EMAIL, GITHUB_PROFILE_URL, SKILLS};

#[test]
fn catalog_has_three_projects_in_declared_order() {
    let projects = catalog::projects();
    assert_eq!(projects.len(), 3);

    let titles: Vec<&str> = projects.iter().map(|p| p.title).collect();
    assert_eq!(titles, ["LearnJapanese", "reMarkable", "FinSight AI"]);
}

#[test]
fn project_ids_are_unique() {
    let projects = catalog::projects();
    for (i, a) in projects.iter().enumerate() {
        for b in &projects[i + 1..] {
            assert_ne!(a.id, b.id);
        }
    }
}

#[test]
fn tech_tags_keep_declared_order_and_duplicates() {
    let remarkable = &catalog::projects()[1];
    assert_eq!(
        remarkable.tech_stack,
        [
            "Python",
            "Flask",
            "SQLite",
            "Javascript",
            "Socket.IO",
            "HTML",
            "CSS"
        ]
    );
}

#[test]
fn every_project_has_two_outbound_links() {
    for project in catalog::projects() {
        assert!(project.github_url.starts_with("https://"), "{}", project.title);
        assert!(project.live_url.starts_with("https://"), "{}", project.title);
    }
}

#[test]
fn catalog_serializes_in_order() -> anyhow::Result<()> {
    let json = serde_json::to_string(catalog::projects())?;
    let learn = json.find("LearnJapanese").unwrap();
    let remarkable = json.find("reMarkable").unwrap();
    let finsight = json.find("FinSight AI").unwrap();
    assert!(learn < remarkable && remarkable < finsight);
    Ok(())
}

#[test]
fn contact_links_are_openable_targets() {
    assert!(CONTACT_EMAIL.starts_with("mailto:"));
    assert!(GITHUB_PROFILE_URL.starts_with("https://"));
}

#[test]
fn skills_are_nonempty_and_unique() {
    assert!(!SKILLS.is_empty());
    for (i, a) in SKILLS.iter().enumerate() {
        for b in &SKILLS[i + 1..] {
            assert_ne!(a, b);
        }
    }
}
