use campus_models::{AssessmentRecord, Course, CourseId, NavItem, Role, StudentId};
use fake::faker::lorem::en::Word;
use fake::{Fake, Faker};
use serde::Serialize;
use std::path::{Path, PathBuf};

#[allow(dead_code)]
pub fn random_role() -> Role {
    Role::ALL[(0..Role::ALL.len()).fake::<usize>()]
}

/// Resource id that is not in the built-in table.
#[allow(dead_code)]
pub fn random_unknown_resource() -> String {
    let word: String = Word().fake();
    format!("{}-{}", word, (1000..9999).fake::<u32>())
}

/// A random in-range record for the pair: CA, regular final or resit.
#[allow(dead_code)]
pub fn random_record(student_id: StudentId, course_id: CourseId) -> AssessmentRecord {
    let score: f64 = (0.0..100.0).fake();
    let record = match (0..3).fake::<u8>() {
        0 => AssessmentRecord::continuous(student_id, course_id, score),
        1 => AssessmentRecord::final_exam(student_id, course_id, score),
        _ => AssessmentRecord::resit(student_id, course_id, score),
    };
    record
        .with_weight((0.5..3.0).fake())
        .with_term(format!("Term {}", (1..4).fake::<u8>()))
}

#[allow(dead_code)]
pub fn random_records(
    student_id: StudentId,
    course_id: CourseId,
    count: usize,
) -> Vec<AssessmentRecord> {
    (0..count).map(|_| random_record(student_id, course_id)).collect()
}

/// Navigation items drawn from known and unknown resources, possibly repeated.
#[allow(dead_code)]
pub fn random_nav_items(count: usize) -> Vec<NavItem> {
    let known = campus_core::permissions::default_navigation();
    (0..count)
        .map(|_| {
            if Faker.fake::<bool>() {
                known[(0..known.len()).fake::<usize>()].clone()
            } else {
                let resource = random_unknown_resource();
                NavItem::new(resource.as_str(), &resource, "circle")
            }
        })
        .collect()
}

#[allow(dead_code)]
pub fn sample_catalog() -> Vec<Course> {
    vec![
        Course::new(CourseId::new(101), "MAT101", 3),
        Course::new(CourseId::new(102), "ETH100", 1),
        Course::new(CourseId::new(201), "MAT201", 4).with_prerequisites(vec![CourseId::new(101)]),
    ]
}

#[allow(dead_code)]
pub fn write_json<T: Serialize>(dir: &Path, name: &str, value: &T) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, serde_json::to_string_pretty(value).unwrap()).unwrap();
    path
}

#[allow(dead_code)]
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}
