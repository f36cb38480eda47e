//! Integration tests for `SqliteStore` and the managers against an in-memory
//! database.

use std::sync::Arc;

use campus_core::{
  Error as CoreError,
  buzz::{BuzzManager, BuzzPatch, NewBuzz},
  faculty::{
    BookChapter, Certification, Collections, EmploymentType, Faculty,
    FacultyManager, FacultyPatch, NewFaculty, Patent, Qualification, Record,
  },
  store::{CampusStore, FacultyQuery},
};
use serde_json::json;
use uuid::Uuid;

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

async fn managers() -> (FacultyManager<SqliteStore>, BuzzManager<SqliteStore>) {
  let store = Arc::new(store().await);
  (FacultyManager::new(Arc::clone(&store)), BuzzManager::new(store))
}

fn qualification(degree: &str) -> Qualification {
  Qualification {
    degree:         degree.into(),
    passing_year:   "2010".into(),
    college:        "NIT Trichy".into(),
    specialization: "VLSI".into(),
  }
}

fn patent(title: &str) -> Patent {
  Patent {
    title:              title.into(),
    authors:            "R. Iyer".into(),
    date:               "2021-04-01".into(),
    application_number: "IN2021-0042".into(),
    patent_office:      "Chennai".into(),
    status:             "Granted".into(),
    reference:          "REF-1".into(),
  }
}

fn faculty(name: &str, department: &str) -> NewFaculty {
  NewFaculty {
    name:            name.into(),
    designation:     "Assistant Professor".into(),
    department:      department.into(),
    email:           format!("{}@college.edu", name.to_lowercase()),
    joining_date:    "2015-07-01".into(),
    experience:      "9 years".into(),
    employment_type: EmploymentType::Regular,
    ..Default::default()
  }
}

fn head(name: &str, department: &str, username: &str) -> NewFaculty {
  NewFaculty {
    designation:        "Professor".into(),
    is_department_head: true,
    username:           Some(username.into()),
    password:           Some("s3cret-pass".into()),
    ..faculty(name, department)
  }
}

// ─── Faculty create / get ────────────────────────────────────────────────────

#[tokio::test]
async fn create_and_get_faculty_with_children() {
  let (faculty_mgr, _) = managers().await;

  let mut input = faculty("Meera", "ECE");
  input.collections.qualifications = vec![qualification("BE"), qualification("ME")];
  input.collections.patents = vec![patent("Low-power ADC")];
  input.image = Some(vec![0x89, 0x50, 0x4e, 0x47]);

  let created = faculty_mgr.create(input).await.unwrap();
  assert_eq!(created.collections.qualifications.len(), 2);
  assert!(created.username.is_none());
  assert!(created.password_hash.is_none());

  let fetched = faculty_mgr.get(created.faculty_id).await.unwrap();
  assert_eq!(fetched.name, "Meera");
  assert_eq!(fetched.image.as_deref(), Some(&[0x89, 0x50, 0x4e, 0x47][..]));
  assert_eq!(fetched.collections, created.collections);

  let degrees: Vec<_> = fetched
    .collections
    .qualifications
    .iter()
    .map(|q| q.value.degree.as_str())
    .collect();
  assert_eq!(degrees, ["BE", "ME"]);
}

#[tokio::test]
async fn get_missing_faculty_is_not_found() {
  let (faculty_mgr, _) = managers().await;
  let id = Uuid::new_v4();
  assert!(matches!(
    faculty_mgr.get(id).await,
    Err(CoreError::FacultyNotFound(missing)) if missing == id
  ));
}

#[tokio::test]
async fn optional_child_fields_round_trip_as_null() {
  let (faculty_mgr, _) = managers().await;

  let mut input = faculty("Arun", "CSE");
  input.collections.book_chapters = vec![BookChapter {
    title:            "Graph Mining".into(),
    authors:          "Arun K".into(),
    book_title:       "Advances in Data Science".into(),
    publisher:        "Springer".into(),
    publication_year: "2022".into(),
    doi:              None,
    isbn:             Some("978-3-16-148410-0".into()),
    scopus_indexed:   true,
    page_numbers:     "10-24".into(),
  }];
  input.collections.certifications = vec![Certification {
    name:                 "AWS Solutions Architect".into(),
    issuing_organization: "Amazon".into(),
    issue_date:           "2023-01-10".into(),
    expiry_date:          None,
    credential_id:        "AWS-123".into(),
    credential_url:       None,
    credits:              None,
  }];

  let created = faculty_mgr.create(input).await.unwrap();
  let fetched = faculty_mgr.get(created.faculty_id).await.unwrap();

  let chapter = &fetched.collections.book_chapters[0].value;
  assert!(chapter.doi.is_none());
  assert!(chapter.scopus_indexed);
  assert_eq!(chapter.isbn.as_deref(), Some("978-3-16-148410-0"));
  assert!(fetched.collections.certifications[0].value.expiry_date.is_none());
}

#[tokio::test]
async fn create_rejects_missing_required_fields() {
  let (faculty_mgr, _) = managers().await;
  let mut input = faculty("Ravi", "MECH");
  input.email = "  ".into();
  assert!(matches!(
    faculty_mgr.create(input).await,
    Err(CoreError::Validation(_))
  ));
}

// ─── Department heads ────────────────────────────────────────────────────────

#[tokio::test]
async fn head_requires_username_and_password() {
  let (faculty_mgr, _) = managers().await;
  let mut input = head("Lakshmi", "EEE", "lakshmi");
  input.password = None;
  assert!(matches!(
    faculty_mgr.create(input).await,
    Err(CoreError::Validation(_))
  ));
}

#[tokio::test]
async fn non_head_credentials_are_discarded() {
  let (faculty_mgr, _) = managers().await;
  let mut input = faculty("Vikram", "CIVIL");
  input.username = Some("vikram".into());
  input.password = Some("ignored".into());

  let created = faculty_mgr.create(input).await.unwrap();
  assert!(created.username.is_none());
  assert!(created.password_hash.is_none());
}

#[tokio::test]
async fn head_password_is_hashed() {
  let (faculty_mgr, _) = managers().await;
  let created = faculty_mgr
    .create(head("Lakshmi", "EEE", "lakshmi"))
    .await
    .unwrap();

  let hash = created.password_hash.as_deref().unwrap();
  assert_ne!(hash, "s3cret-pass");
  assert!(hash.starts_with("$argon2"));
}

#[tokio::test]
async fn second_head_in_department_conflicts() {
  let s = Arc::new(store().await);
  let faculty_mgr = FacultyManager::new(Arc::clone(&s));
  faculty_mgr.create(head("Lakshmi", "EEE", "lakshmi")).await.unwrap();

  let mut second = head("Suresh", "EEE", "suresh");
  second.collections.qualifications = vec![qualification("PhD")];
  let result = faculty_mgr.create(second).await;
  assert!(matches!(result, Err(CoreError::Conflict(_))));

  // Nothing was written for the rejected record.
  let eee = faculty_mgr.list_by_department("EEE").await.unwrap();
  assert_eq!(eee.len(), 1);
  assert_eq!(s.child_row_count().await.unwrap(), 0);
}

#[tokio::test]
async fn heads_of_different_departments_coexist() {
  let (faculty_mgr, _) = managers().await;
  faculty_mgr.create(head("Lakshmi", "EEE", "lakshmi")).await.unwrap();
  faculty_mgr.create(head("Suresh", "CSE", "suresh")).await.unwrap();

  let eee = faculty_mgr.find_department_head("EEE").await.unwrap().unwrap();
  let cse = faculty_mgr.find_department_head("CSE").await.unwrap().unwrap();
  assert_eq!(eee.name, "Lakshmi");
  assert_eq!(cse.name, "Suresh");
  assert!(faculty_mgr.find_department_head("MECH").await.unwrap().is_none());
}

#[tokio::test]
async fn duplicate_username_conflicts() {
  let (faculty_mgr, _) = managers().await;
  faculty_mgr.create(head("Lakshmi", "EEE", "hod")).await.unwrap();

  let result = faculty_mgr.create(head("Suresh", "CSE", "hod")).await;
  assert!(matches!(result, Err(CoreError::Conflict(_))));
}

#[tokio::test]
async fn promoting_into_an_occupied_department_conflicts() {
  let (faculty_mgr, _) = managers().await;
  faculty_mgr.create(head("Lakshmi", "EEE", "lakshmi")).await.unwrap();
  let other = faculty_mgr.create(faculty("Suresh", "EEE")).await.unwrap();

  let patch = FacultyPatch {
    is_department_head: Some(true),
    username:           Some("suresh".into()),
    password:           Some("pw".into()),
    ..Default::default()
  };
  let result = faculty_mgr.update(other.faculty_id, patch).await;
  assert!(matches!(result, Err(CoreError::Conflict(_))));

  let unchanged = faculty_mgr.get(other.faculty_id).await.unwrap();
  assert!(!unchanged.is_department_head);
  assert!(unchanged.username.is_none());
}

#[tokio::test]
async fn head_can_be_updated_without_conflicting_with_itself() {
  let (faculty_mgr, _) = managers().await;
  let created = faculty_mgr
    .create(head("Lakshmi", "EEE", "lakshmi"))
    .await
    .unwrap();

  let patch = FacultyPatch {
    designation: Some("Professor & Head".into()),
    ..Default::default()
  };
  let updated = faculty_mgr.update(created.faculty_id, patch).await.unwrap();
  assert_eq!(updated.designation, "Professor & Head");
  assert!(updated.is_department_head);
  assert_eq!(updated.password_hash, created.password_hash);
}

#[tokio::test]
async fn promotion_without_credentials_is_invalid() {
  let (faculty_mgr, _) = managers().await;
  let created = faculty_mgr.create(faculty("Suresh", "EEE")).await.unwrap();

  let patch = FacultyPatch { is_department_head: Some(true), ..Default::default() };
  assert!(matches!(
    faculty_mgr.update(created.faculty_id, patch).await,
    Err(CoreError::Validation(_))
  ));
}

#[tokio::test]
async fn demotion_clears_credentials() {
  let (faculty_mgr, _) = managers().await;
  let created = faculty_mgr
    .create(head("Lakshmi", "EEE", "lakshmi"))
    .await
    .unwrap();

  let patch = FacultyPatch { is_department_head: Some(false), ..Default::default() };
  let updated = faculty_mgr.update(created.faculty_id, patch).await.unwrap();
  assert!(!updated.is_department_head);
  assert!(updated.username.is_none());
  assert!(updated.password_hash.is_none());

  // The department is free again.
  faculty_mgr.create(head("Suresh", "EEE", "suresh")).await.unwrap();
}

#[tokio::test]
async fn demotion_ignores_supplied_credentials() {
  let (faculty_mgr, _) = managers().await;
  let created = faculty_mgr
    .create(head("Lakshmi", "EEE", "lakshmi"))
    .await
    .unwrap();

  let patch = FacultyPatch {
    is_department_head: Some(false),
    username:           Some("lakshmi2".into()),
    password:           Some("another-pass".into()),
    ..Default::default()
  };
  let updated = faculty_mgr.update(created.faculty_id, patch).await.unwrap();
  assert!(updated.username.is_none());
  assert!(updated.password_hash.is_none());

  let stored = faculty_mgr.get(created.faculty_id).await.unwrap();
  assert!(stored.username.is_none());
  assert!(stored.password_hash.is_none());
  for (username, password) in [("lakshmi", "s3cret-pass"), ("lakshmi2", "another-pass")] {
    assert!(matches!(
      faculty_mgr
        .validate_department_head_credentials(username, password)
        .await,
      Err(CoreError::Unauthorized)
    ));
  }
}

// ─── Credentials ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn validates_head_credentials() {
  let (faculty_mgr, _) = managers().await;
  let created = faculty_mgr
    .create(head("Lakshmi", "EEE", "lakshmi"))
    .await
    .unwrap();

  let found = faculty_mgr
    .validate_department_head_credentials("lakshmi", "s3cret-pass")
    .await
    .unwrap();
  assert_eq!(found.faculty_id, created.faculty_id);

  assert!(matches!(
    faculty_mgr
      .validate_department_head_credentials("lakshmi", "wrong")
      .await,
    Err(CoreError::Unauthorized)
  ));
  assert!(matches!(
    faculty_mgr
      .validate_department_head_credentials("nobody", "s3cret-pass")
      .await,
    Err(CoreError::Unauthorized)
  ));
}

#[tokio::test]
async fn changed_password_replaces_the_old_one() {
  let (faculty_mgr, _) = managers().await;
  let created = faculty_mgr
    .create(head("Lakshmi", "EEE", "lakshmi"))
    .await
    .unwrap();

  let patch = FacultyPatch { password: Some("rotated".into()), ..Default::default() };
  faculty_mgr.update(created.faculty_id, patch).await.unwrap();

  assert!(faculty_mgr
    .validate_department_head_credentials("lakshmi", "rotated")
    .await
    .is_ok());
  assert!(faculty_mgr
    .validate_department_head_credentials("lakshmi", "s3cret-pass")
    .await
    .is_err());
}

#[tokio::test]
async fn demoted_head_can_no_longer_authenticate() {
  let (faculty_mgr, _) = managers().await;
  let created = faculty_mgr
    .create(head("Lakshmi", "EEE", "lakshmi"))
    .await
    .unwrap();

  let patch = FacultyPatch { is_department_head: Some(false), ..Default::default() };
  faculty_mgr.update(created.faculty_id, patch).await.unwrap();

  assert!(matches!(
    faculty_mgr
      .validate_department_head_credentials("lakshmi", "s3cret-pass")
      .await,
    Err(CoreError::Unauthorized)
  ));
}

// ─── Faculty update / delete ─────────────────────────────────────────────────

#[tokio::test]
async fn omitted_collections_are_kept_and_supplied_ones_replaced() {
  let (faculty_mgr, _) = managers().await;

  let mut input = faculty("Meera", "ECE");
  input.collections.qualifications = vec![qualification("BE")];
  input.collections.patents = vec![patent("Low-power ADC"), patent("Sensor mesh")];
  let created = faculty_mgr.create(input).await.unwrap();

  let mut patch = FacultyPatch::default();
  patch.collections.patents = Some(vec![patent("Adaptive filter")]);
  let updated = faculty_mgr.update(created.faculty_id, patch).await.unwrap();

  assert_eq!(
    updated.collections.qualifications,
    created.collections.qualifications
  );
  assert_eq!(updated.collections.patents.len(), 1);
  assert_eq!(updated.collections.patents[0].value.title, "Adaptive filter");
}

#[tokio::test]
async fn empty_collection_clears_it() {
  let (faculty_mgr, _) = managers().await;

  let mut input = faculty("Meera", "ECE");
  input.collections.qualifications = vec![qualification("BE")];
  let created = faculty_mgr.create(input).await.unwrap();

  let mut patch = FacultyPatch::default();
  patch.collections.qualifications = Some(Vec::new());
  let updated = faculty_mgr.update(created.faculty_id, patch).await.unwrap();
  assert!(updated.collections.qualifications.is_empty());
}

#[tokio::test]
async fn update_keeps_image_when_omitted() {
  let (faculty_mgr, _) = managers().await;
  let mut input = faculty("Meera", "ECE");
  input.image = Some(vec![1, 2, 3]);
  let created = faculty_mgr.create(input).await.unwrap();

  let patch = FacultyPatch { experience: Some("10 years".into()), ..Default::default() };
  let updated = faculty_mgr.update(created.faculty_id, patch).await.unwrap();
  assert_eq!(updated.image, Some(vec![1, 2, 3]));
  assert_eq!(updated.experience, "10 years");
}

#[tokio::test]
async fn update_missing_faculty_is_not_found() {
  let (faculty_mgr, _) = managers().await;
  let result = faculty_mgr
    .update(Uuid::new_v4(), FacultyPatch::default())
    .await;
  assert!(matches!(result, Err(CoreError::FacultyNotFound(_))));
}

#[tokio::test]
async fn delete_removes_faculty_and_children() {
  let s = Arc::new(store().await);
  let faculty_mgr = FacultyManager::new(Arc::clone(&s));

  let mut input = faculty("Meera", "ECE");
  input.collections.qualifications = vec![qualification("BE")];
  input.collections.patents = vec![patent("Low-power ADC")];
  let created = faculty_mgr.create(input).await.unwrap();

  assert_eq!(s.child_row_count().await.unwrap(), 2);

  faculty_mgr.delete(created.faculty_id).await.unwrap();
  assert!(s.get_faculty(created.faculty_id).await.unwrap().is_none());
  assert_eq!(s.child_row_count().await.unwrap(), 0);
  assert!(matches!(
    faculty_mgr.delete(created.faculty_id).await,
    Err(CoreError::FacultyNotFound(_))
  ));
}

#[tokio::test]
async fn deleting_a_head_frees_the_department() {
  let (faculty_mgr, _) = managers().await;
  let created = faculty_mgr
    .create(head("Lakshmi", "EEE", "lakshmi"))
    .await
    .unwrap();
  faculty_mgr.delete(created.faculty_id).await.unwrap();

  assert!(faculty_mgr.find_department_head("EEE").await.unwrap().is_none());
  faculty_mgr.create(head("Suresh", "EEE", "lakshmi")).await.unwrap();
}

// ─── Listing ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn list_filters_by_department() {
  let (faculty_mgr, _) = managers().await;
  faculty_mgr.create(faculty("Meera", "ECE")).await.unwrap();
  faculty_mgr.create(faculty("Arun", "CSE")).await.unwrap();
  faculty_mgr.create(faculty("Divya", "ECE")).await.unwrap();

  let all = faculty_mgr.list(FacultyQuery::default()).await.unwrap();
  assert_eq!(all.len(), 3);

  let ece = faculty_mgr.list_by_department("ECE").await.unwrap();
  let names: Vec<_> = ece.iter().map(|f| f.name.as_str()).collect();
  assert_eq!(names, ["Meera", "Divya"]);

  assert!(faculty_mgr.list_by_department("MBA").await.unwrap().is_empty());
}

#[tokio::test]
async fn summary_listing_skips_children() {
  let s = store().await;
  let faculty_mgr = FacultyManager::new(Arc::new(s.clone()));

  let mut input = faculty("Meera", "ECE");
  input.collections.qualifications = vec![qualification("BE")];
  faculty_mgr.create(input).await.unwrap();

  let summary = s.list_faculty(FacultyQuery::default()).await.unwrap();
  assert!(summary[0].collections.qualifications.is_empty());

  let full = s
    .list_faculty(FacultyQuery { department: None, hydrate: true })
    .await
    .unwrap();
  assert_eq!(full[0].collections.qualifications.len(), 1);
}

// ─── Buzz ────────────────────────────────────────────────────────────────────

fn post(content: &str) -> NewBuzz {
  NewBuzz {
    content: content.into(),
    design:  json!({ "body": { "rows": [] } }),
  }
}

#[tokio::test]
async fn create_and_get_buzz() {
  let (_, buzz_mgr) = managers().await;
  let created = buzz_mgr.create(post("<p>Tech fest</p>")).await.unwrap();
  assert_eq!(created.created_at, created.updated_at);

  let fetched = buzz_mgr.get(created.buzz_id).await.unwrap();
  assert_eq!(fetched, created);
}

#[tokio::test]
async fn buzz_list_is_newest_first() {
  let (_, buzz_mgr) = managers().await;
  let first = buzz_mgr.create(post("first")).await.unwrap();
  let second = buzz_mgr.create(post("second")).await.unwrap();
  let third = buzz_mgr.create(post("third")).await.unwrap();

  let ids: Vec<_> = buzz_mgr
    .list()
    .await
    .unwrap()
    .into_iter()
    .map(|b| b.buzz_id)
    .collect();
  assert_eq!(ids, [third.buzz_id, second.buzz_id, first.buzz_id]);
}

#[tokio::test]
async fn buzz_update_advances_updated_at() {
  let (_, buzz_mgr) = managers().await;
  let created = buzz_mgr.create(post("draft")).await.unwrap();

  let patch = BuzzPatch { content: Some("final".into()), design: None };
  let updated = buzz_mgr.update(created.buzz_id, patch).await.unwrap();
  assert_eq!(updated.content, "final");
  assert_eq!(updated.design, created.design);
  assert_eq!(updated.created_at, created.created_at);
  assert!(updated.updated_at > created.updated_at);

  let fetched = buzz_mgr.get(created.buzz_id).await.unwrap();
  assert_eq!(fetched, updated);
}

#[tokio::test]
async fn buzz_rejects_non_object_design() {
  let (_, buzz_mgr) = managers().await;
  let input = NewBuzz { content: "x".into(), design: json!([1, 2]) };
  assert!(matches!(
    buzz_mgr.create(input).await,
    Err(CoreError::Validation(_))
  ));
}

#[tokio::test]
async fn missing_buzz_is_not_found() {
  let (_, buzz_mgr) = managers().await;
  let id = Uuid::new_v4();
  assert!(matches!(buzz_mgr.get(id).await, Err(CoreError::BuzzNotFound(_))));
  assert!(matches!(
    buzz_mgr.update(id, BuzzPatch::default()).await,
    Err(CoreError::BuzzNotFound(_))
  ));
  assert!(matches!(buzz_mgr.delete(id).await, Err(CoreError::BuzzNotFound(_))));
}

#[tokio::test]
async fn delete_buzz() {
  let (_, buzz_mgr) = managers().await;
  let created = buzz_mgr.create(post("gone soon")).await.unwrap();
  buzz_mgr.delete(created.buzz_id).await.unwrap();
  assert!(buzz_mgr.list().await.unwrap().is_empty());
}

// ─── Store-level backstops ───────────────────────────────────────────────────

#[tokio::test]
async fn store_update_of_missing_faculty_is_not_found() {
  let s = store().await;
  let faculty_mgr = FacultyManager::new(Arc::new(s.clone()));
  let created = faculty_mgr.create(faculty("Meera", "ECE")).await.unwrap();
  faculty_mgr.delete(created.faculty_id).await.unwrap();

  let result = s.update_faculty(created, Vec::new()).await;
  assert!(matches!(result, Err(crate::Error::FacultyNotFound(_))));
}

#[tokio::test]
async fn store_reports_head_conflict_as_domain_error() {
  let s = store().await;
  let faculty_mgr = FacultyManager::new(Arc::new(s.clone()));
  let first = faculty_mgr
    .create(head("Lakshmi", "EEE", "lakshmi"))
    .await
    .unwrap();

  let mut clash = first.clone();
  clash.faculty_id = Uuid::new_v4();
  clash.username = Some("other".into());
  let err = s.insert_faculty(clash).await.unwrap_err();
  assert!(matches!(err, crate::Error::DepartmentHeadTaken(ref d) if d == "EEE"));
  assert!(matches!(CoreError::from(err), CoreError::Conflict(_)));
}

#[tokio::test]
async fn failed_child_insert_leaves_nothing_behind() {
  let s = store().await;
  let shared = Uuid::new_v4();
  let faculty = Faculty {
    faculty_id:         Uuid::new_v4(),
    name:               "Meera".into(),
    designation:        "Professor".into(),
    department:         "ECE".into(),
    email:              "meera@college.edu".into(),
    joining_date:       "2014-06-15".into(),
    experience:         "11 years".into(),
    employment_type:    EmploymentType::Regular,
    is_department_head: false,
    username:           None,
    password_hash:      None,
    image:              None,
    collections:        Collections {
      qualifications: vec![
        Record { record_id: shared, value: qualification("B.Tech") },
        Record { record_id: shared, value: qualification("M.Tech") },
      ],
      patents: vec![Record::new(patent("Low-power ADC"))],
      ..Default::default()
    },
  };
  let id = faculty.faculty_id;

  let err = s.insert_faculty(faculty).await.unwrap_err();
  assert!(matches!(err, crate::Error::Database(_)));
  assert!(s.get_faculty(id).await.unwrap().is_none());
  assert_eq!(s.child_row_count().await.unwrap(), 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_head_claims_admit_one() {
  let (faculty_mgr, _) = managers().await;

  let claims: Vec<_> = (0..8)
    .map(|i| {
      let faculty_mgr = faculty_mgr.clone();
      tokio::spawn(async move {
        faculty_mgr
          .create(head(&format!("Head {i}"), "CS", &format!("head{i}")))
          .await
      })
    })
    .collect();

  let mut ok = 0;
  let mut conflicts = 0;
  for claim in claims {
    match claim.await.unwrap() {
      Ok(_) => ok += 1,
      Err(CoreError::Conflict(_)) => conflicts += 1,
      Err(e) => panic!("unexpected error: {e}"),
    }
  }
  assert_eq!((ok, conflicts), (1, 7));

  let heads = faculty_mgr.list_by_department("CS").await.unwrap();
  assert_eq!(heads.len(), 1);
  assert!(faculty_mgr.find_department_head("CS").await.unwrap().is_some());
}
