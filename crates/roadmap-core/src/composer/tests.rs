#[cfg(test)]
mod composer_tests {
    use crate::{
        catalog::sample_courses,
        composer::{derivation::HOURS_PER_WEEK, LoadOutcome, RoadmapComposer},
        error::ComposerError,
        models::{Course, Level, RoadmapField, ValidationFailure},
    };

    fn composer() -> RoadmapComposer {
        RoadmapComposer::new(sample_courses())
    }

    fn selected_ids(composer: &RoadmapComposer) -> Vec<&str> {
        composer.selected().iter().map(|c| c.id.as_str()).collect()
    }

    fn assert_dense_orders(composer: &RoadmapComposer) {
        for (position, course) in composer.selected().iter().enumerate() {
            assert_eq!(course.order, Some(position as u32));
            let in_catalog = composer.course(&course.id).unwrap();
            assert_eq!(in_catalog.order, Some(position as u32));
            assert!(in_catalog.is_selected);
        }
        for course in composer.catalog().iter().filter(|c| !c.is_selected) {
            assert_eq!(course.order, None, "unselected '{}' kept an order", course.id);
        }
    }

    fn fill_envelope(composer: &mut RoadmapComposer) {
        let form = composer.form_mut();
        form.title = "Full-stack Path".to_string();
        form.description = "From UI to database".to_string();
        form.category = "Backend".to_string();
        form.level = Some(Level::Intermediate);
    }

    #[test]
    fn test_new_composer_has_empty_selection() {
        let composer = composer();
        assert_eq!(composer.catalog().len(), sample_courses().len());
        assert!(composer.selected().is_empty());
        assert_eq!(composer.visible_courses().len(), composer.catalog().len());
        assert_eq!(composer.catalog_error(), None);
    }

    #[test]
    fn test_toggle_course_appends_in_selection_order() {
        let mut composer = composer();
        assert!(composer.toggle_course("node-rest-apis").unwrap());
        assert!(composer.toggle_course("angular-fundamentals").unwrap());
        assert!(composer.toggle_course("git-workflow").unwrap());

        assert_eq!(
            selected_ids(&composer),
            vec!["node-rest-apis", "angular-fundamentals", "git-workflow"]
        );
        assert_dense_orders(&composer);
    }

    #[test]
    fn test_toggle_course_out_renumbers_remaining() {
        let mut composer = composer();
        composer.toggle_course("node-rest-apis").unwrap();
        composer.toggle_course("angular-fundamentals").unwrap();
        composer.toggle_course("git-workflow").unwrap();

        assert!(!composer.toggle_course("angular-fundamentals").unwrap());
        assert_eq!(selected_ids(&composer), vec!["node-rest-apis", "git-workflow"]);
        assert_dense_orders(&composer);
        assert_eq!(composer.course("angular-fundamentals").unwrap().order, None);

        // Re-selecting goes to the end.
        composer.toggle_course("angular-fundamentals").unwrap();
        assert_eq!(
            selected_ids(&composer),
            vec!["node-rest-apis", "git-workflow", "angular-fundamentals"]
        );
        assert_dense_orders(&composer);
    }

    #[test]
    fn test_selected_list_matches_flags_after_toggle_sequence() {
        let mut composer = composer();
        let ids: Vec<String> = sample_courses().into_iter().map(|c| c.id).collect();
        let sequence = [0, 3, 5, 3, 7, 0, 1, 8, 5, 2, 3];

        for &i in &sequence {
            composer.toggle_course(&ids[i]).unwrap();

            let mut flagged: Vec<&str> = composer
                .catalog()
                .iter()
                .filter(|c| c.is_selected)
                .map(|c| c.id.as_str())
                .collect();
            let mut derived = selected_ids(&composer);
            flagged.sort_unstable();
            derived.sort_unstable();
            assert_eq!(flagged, derived);
            assert_dense_orders(&composer);
        }
    }

    #[test]
    fn test_toggle_unknown_course() {
        let mut composer = composer();
        composer.toggle_course("git-workflow").unwrap();
        let err = composer.toggle_course("cobol-101").unwrap_err();
        assert!(matches!(err, ComposerError::CourseNotFound { ref id } if id == "cobol-101"));
        assert_eq!(selected_ids(&composer), vec!["git-workflow"]);
    }

    #[test]
    fn test_reorder_moves_and_shifts() {
        let mut composer = composer();
        for id in ["angular-fundamentals", "node-rest-apis", "mongodb-essentials", "git-workflow"] {
            composer.toggle_course(id).unwrap();
        }

        composer.reorder(0, 2).unwrap();
        assert_eq!(
            selected_ids(&composer),
            vec!["node-rest-apis", "mongodb-essentials", "angular-fundamentals", "git-workflow"]
        );
        assert_dense_orders(&composer);

        composer.reorder(3, 0).unwrap();
        assert_eq!(
            selected_ids(&composer),
            vec!["git-workflow", "node-rest-apis", "mongodb-essentials", "angular-fundamentals"]
        );
        assert_dense_orders(&composer);
    }

    #[test]
    fn test_reorder_same_index_is_noop() {
        let mut composer = composer();
        composer.toggle_course("angular-fundamentals").unwrap();
        composer.toggle_course("node-rest-apis").unwrap();
        composer.reorder(1, 1).unwrap();
        assert_eq!(
            selected_ids(&composer),
            vec!["angular-fundamentals", "node-rest-apis"]
        );
        assert_dense_orders(&composer);
    }

    #[test]
    fn test_reorder_out_of_bounds_leaves_orders_intact() {
        let mut composer = composer();
        composer.toggle_course("angular-fundamentals").unwrap();
        composer.toggle_course("node-rest-apis").unwrap();
        let before = composer.catalog().to_vec();

        let err = composer.reorder(0, 2).unwrap_err();
        assert!(matches!(err, ComposerError::InvalidInput { ref field, .. } if field == "index"));
        assert!(composer.reorder(5, 0).is_err());

        assert_eq!(composer.catalog(), before.as_slice());
        assert_dense_orders(&composer);
    }

    #[test]
    fn test_reorder_survives_later_toggles() {
        let mut composer = composer();
        for id in ["angular-fundamentals", "node-rest-apis", "mongodb-essentials"] {
            composer.toggle_course(id).unwrap();
        }
        composer.reorder(2, 0).unwrap();
        composer.toggle_course("git-workflow").unwrap();

        assert_eq!(
            selected_ids(&composer),
            vec!["mongodb-essentials", "angular-fundamentals", "node-rest-apis", "git-workflow"]
        );
        assert_dense_orders(&composer);
    }

    #[test]
    fn test_remove_from_selection() {
        let mut composer = composer();
        composer.toggle_course("angular-fundamentals").unwrap();
        composer.toggle_course("node-rest-apis").unwrap();

        assert!(composer.remove_from_selection("angular-fundamentals").unwrap());
        assert_eq!(selected_ids(&composer), vec!["node-rest-apis"]);
        assert_dense_orders(&composer);

        // Not selected / unknown: no-op
        assert!(!composer.remove_from_selection("angular-fundamentals").unwrap());
        assert!(!composer.remove_from_selection("nope").unwrap());
        assert_eq!(selected_ids(&composer), vec!["node-rest-apis"]);
    }

    #[test]
    fn test_category_filter_includes_general() {
        let mut composer = composer();
        composer.set_category_filter(Some("Backend"));

        let visible: Vec<&str> = composer.visible_courses().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(
            visible,
            vec![
                "node-rest-apis",
                "mongodb-essentials",
                "spring-microservices",
                "git-workflow",
                "agile-practices"
            ]
        );

        composer.set_category_filter(Some(""));
        assert_eq!(composer.visible_courses().len(), composer.catalog().len());

        composer.set_category_filter(Some("Quantum"));
        let visible: Vec<&str> = composer.visible_courses().iter().map(|c| c.category.as_str()).collect();
        assert!(visible.iter().all(|category| *category == "General"));

        composer.set_category_filter(None);
        assert_eq!(composer.visible_courses().len(), composer.catalog().len());
    }

    #[test]
    fn test_backend_search_mongo() {
        let mut composer = composer();
        composer.set_category_filter(Some("Backend"));
        composer.set_search_term("mongo");

        let visible = composer.visible_courses();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "mongodb-essentials");
        assert!(visible[0]
            .skills
            .iter()
            .any(|skill| skill.to_lowercase().contains("mongo")));
    }

    #[test]
    fn test_search_matches_title_instructor_and_skills() {
        let mut composer = composer();

        composer.set_search_term("KUBER");
        let ids: Vec<&str> = composer.visible_courses().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["docker-kubernetes"]);

        composer.set_search_term("sarah");
        let ids: Vec<&str> = composer.visible_courses().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["react-advanced", "git-workflow"]);

        composer.set_search_term("patterns");
        let ids: Vec<&str> = composer.visible_courses().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["react-advanced"]);

        composer.set_search_term("zzz");
        assert!(composer.visible_courses().is_empty());

        composer.set_search_term("   ");
        assert_eq!(composer.visible_courses().len(), composer.catalog().len());
    }

    #[test]
    fn test_filtering_does_not_touch_selection() {
        let mut composer = composer();
        composer.toggle_course("python-data-analysis").unwrap();
        composer.toggle_course("angular-fundamentals").unwrap();

        composer.set_category_filter(Some("Backend"));
        composer.set_search_term("mongo");
        assert_eq!(
            selected_ids(&composer),
            vec!["python-data-analysis", "angular-fundamentals"]
        );
        assert!(composer.is_selected("python-data-analysis"));
        assert_dense_orders(&composer);
    }

    #[test]
    fn test_toggle_all_visible_selects_then_deselects() {
        let mut composer = composer();
        composer.set_category_filter(Some("Frontend"));

        assert!(composer.toggle_all_visible());
        assert!(composer.all_visible_selected());
        let visible: Vec<String> = composer.visible_courses().iter().map(|c| c.id.clone()).collect();
        assert_eq!(selected_ids(&composer), visible.iter().map(String::as_str).collect::<Vec<_>>());
        assert_dense_orders(&composer);

        assert!(!composer.toggle_all_visible());
        assert!(composer.selected().is_empty());
        assert_dense_orders(&composer);
    }

    #[test]
    fn test_toggle_all_visible_is_idempotent_for_visible_subset() {
        let mut composer = composer();
        composer.toggle_course("node-rest-apis").unwrap();
        composer.toggle_course("python-data-analysis").unwrap();
        composer.set_category_filter(Some("Backend"));

        // Partially selected: first call selects the rest, second clears them.
        composer.toggle_all_visible();
        composer.toggle_all_visible();

        let visible_selected = composer
            .visible_courses()
            .iter()
            .filter(|c| c.is_selected)
            .count();
        assert_eq!(visible_selected, 0);
        // Hidden selection untouched
        assert!(composer.is_selected("python-data-analysis"));

        // From an empty visible selection, two calls return to empty.
        composer.toggle_all_visible();
        composer.toggle_all_visible();
        assert_eq!(selected_ids(&composer), vec!["python-data-analysis"]);
        assert_dense_orders(&composer);
    }

    #[test]
    fn test_toggle_all_visible_keeps_existing_order_first() {
        let mut composer = composer();
        composer.toggle_course("mongodb-essentials").unwrap();
        composer.set_category_filter(Some("Backend"));
        composer.toggle_all_visible();

        let ids = selected_ids(&composer);
        assert_eq!(ids[0], "mongodb-essentials");
        assert_eq!(ids.len(), 5);
        assert_dense_orders(&composer);
    }

    #[test]
    fn test_toggle_all_visible_with_nothing_visible() {
        let mut composer = composer();
        composer.set_search_term("nothing matches this");
        assert!(!composer.toggle_all_visible());
        assert!(!composer.all_visible_selected());
        assert!(composer.selected().is_empty());
    }

    #[test]
    fn test_duration_derivation() {
        let mut composer = composer();
        composer.toggle_course("angular-fundamentals").unwrap(); // 40 hours
        composer.toggle_course("node-rest-apis").unwrap(); // 50 hours
        assert_eq!(composer.form().duration, "3 weeks");

        composer.toggle_course("angular-fundamentals").unwrap();
        composer.toggle_course("node-rest-apis").unwrap();
        composer.toggle_course("mongodb-essentials").unwrap(); // 20 hours
        assert_eq!(composer.form().duration, "1 weeks");
    }

    #[test]
    fn test_duration_kept_when_selection_empties() {
        let mut composer = composer();
        composer.toggle_course("spring-microservices").unwrap(); // 60 hours
        assert_eq!(composer.form().duration, "2 weeks");

        composer.toggle_course("spring-microservices").unwrap();
        assert!(composer.selected().is_empty());
        assert_eq!(composer.form().duration, "2 weeks");
    }

    #[test]
    fn test_duration_ignores_non_numeric_prefix() {
        let catalog = vec![
            Course::new("a", "A", "X", "self-paced", Level::Beginner, "General"),
            Course::new("b", "B", "X", "41 hours", Level::Beginner, "General"),
        ];
        let mut composer = RoadmapComposer::new(catalog);
        composer.toggle_course("a").unwrap();
        assert_eq!(composer.form().duration, "0 weeks");
        composer.toggle_course("b").unwrap();
        assert_eq!(composer.form().duration, "2 weeks");
    }

    #[test]
    fn test_instructor_derivation_single_instructor() {
        let mut composer = composer();
        composer.toggle_course("angular-fundamentals").unwrap();
        composer.toggle_course("mongodb-essentials").unwrap();
        assert_eq!(composer.form().instructor, "John Smith");
    }

    #[test]
    fn test_instructor_left_untouched_when_instructors_differ() {
        let mut composer = composer();
        composer.form_mut().instructor = "Team Lead".to_string();

        composer.toggle_course("angular-fundamentals").unwrap(); // John Smith
        assert_eq!(composer.form().instructor, "John Smith");

        composer.toggle_course("react-advanced").unwrap(); // Sarah Johnson
        assert_eq!(composer.form().instructor, "John Smith");

        composer.form_mut().instructor = "Team Lead".to_string();
        composer.toggle_course("node-rest-apis").unwrap();
        assert_eq!(composer.form().instructor, "Team Lead");

        // Emptying the selection does not clear it either
        composer.toggle_all_visible();
        composer.toggle_all_visible();
        assert!(composer.selected().is_empty());
        assert_eq!(composer.form().instructor, "Team Lead");
    }

    #[test]
    fn test_skill_union_in_selection_order() {
        let catalog = vec![
            Course::new("a", "A", "X", "10 hours", Level::Beginner, "General")
                .with_skills(["Rust", "SQL", "Rust"]),
            Course::new("b", "B", "X", "10 hours", Level::Beginner, "General")
                .with_skills(["Git", "SQL"]),
        ];
        let mut composer = RoadmapComposer::new(catalog);
        composer.toggle_course("b").unwrap();
        composer.toggle_course("a").unwrap();
        assert_eq!(composer.skills(), vec!["Git", "SQL", "Rust"]);

        composer.reorder(1, 0).unwrap();
        assert_eq!(composer.skills(), vec!["Rust", "SQL", "Git"]);
    }

    #[test]
    fn test_submit_success_payload() {
        let mut composer = composer();
        fill_envelope(&mut composer);
        composer.toggle_course("node-rest-apis").unwrap();
        composer.toggle_course("mongodb-essentials").unwrap();
        composer.reorder(1, 0).unwrap();

        let payload = composer.submit().expect("Submission should succeed");
        assert_eq!(payload.title, "Full-stack Path");
        assert_eq!(payload.level, Level::Intermediate);
        assert_eq!(payload.duration, "2 weeks");
        // Set while only the Node.js course was selected
        assert_eq!(payload.instructor, "Michael Brown");
        assert_eq!(payload.course_ids, vec!["mongodb-essentials", "node-rest-apis"]);
        assert_eq!(payload.course_count, 2);
        assert_eq!(
            payload.skills,
            vec!["MongoDB", "NoSQL", "Aggregation", "Node.js", "Express", "REST"]
        );
    }

    #[test]
    fn test_submit_empty_title_reports_required_field() {
        let mut composer = composer();
        fill_envelope(&mut composer);
        composer.form_mut().title = "   ".to_string();
        composer.toggle_course("angular-fundamentals").unwrap();
        let before = composer.clone();

        let rejected = composer.submit().unwrap_err();
        assert_eq!(
            rejected.failures,
            vec![ValidationFailure::MissingField(RoadmapField::Title)]
        );
        assert!(!rejected.is_empty_selection());
        assert_eq!(composer.catalog(), before.catalog());
        assert_eq!(composer.form(), before.form());
    }

    #[test]
    fn test_submit_without_selection_reports_empty_selection() {
        let mut composer = composer();
        fill_envelope(&mut composer);
        composer.form_mut().duration = "4 weeks".to_string();

        let rejected = composer.submit().unwrap_err();
        assert_eq!(rejected.failures, vec![ValidationFailure::EmptySelection]);
        assert!(rejected.missing_fields().is_empty());
    }

    #[test]
    fn test_submit_reports_every_failure() {
        let composer = composer();
        let rejected = composer.submit().unwrap_err();
        assert_eq!(rejected.missing_fields(), RoadmapField::REQUIRED.to_vec());
        assert!(rejected.is_empty_selection());
        assert!(!rejected.is_missing(RoadmapField::Instructor));
    }

    #[test]
    fn test_preselected_catalog_is_normalized() {
        let mut a = Course::new("a", "A", "X", "10 hours", Level::Beginner, "General");
        let mut b = Course::new("b", "B", "X", "10 hours", Level::Beginner, "General");
        let mut c = Course::new("c", "C", "X", "10 hours", Level::Beginner, "General");
        a.is_selected = true;
        a.order = Some(7);
        b.is_selected = true; // no order, sorts as 0
        c.order = Some(1); // not selected, order dropped

        let composer = RoadmapComposer::new(vec![a, b, c]);
        assert_eq!(selected_ids(&composer), vec!["b", "a"]);
        assert_dense_orders(&composer);
        assert_eq!(composer.form().duration, "1 weeks");
    }

    #[test]
    fn test_catalog_load_applies_latest_only() {
        let mut composer = RoadmapComposer::default();
        let first = composer.begin_catalog_load();
        let second = composer.begin_catalog_load();

        let outcome = composer.finish_catalog_load(second, Ok(sample_courses()));
        assert_eq!(outcome, LoadOutcome::Applied { courses: sample_courses().len() });

        let stale = composer.finish_catalog_load(
            first,
            Ok(vec![Course::new("x", "X", "Y", "1 hours", Level::Beginner, "General")]),
        );
        assert_eq!(stale, LoadOutcome::Stale);
        assert_eq!(composer.catalog().len(), sample_courses().len());
    }

    #[test]
    fn test_catalog_load_failure_keeps_catalog() {
        let mut composer = RoadmapComposer::default();
        let token = composer.begin_catalog_load();
        let outcome = composer.finish_catalog_load(
            token,
            Err(ComposerError::CatalogLoad {
                message: "service unavailable".to_string(),
            }),
        );
        assert!(matches!(outcome, LoadOutcome::Failed { .. }));
        assert!(composer.catalog().is_empty());
        assert!(composer.catalog_error().unwrap().contains("service unavailable"));

        // Retry succeeds and clears the error
        let token = composer.begin_catalog_load();
        composer.finish_catalog_load(token, Ok(sample_courses()));
        assert_eq!(composer.catalog_error(), None);
        assert!(!composer.catalog().is_empty());

        // Failed refresh keeps the stale catalog
        let token = composer.begin_catalog_load();
        composer.finish_catalog_load(
            token,
            Err(ComposerError::CatalogLoad {
                message: "timeout".to_string(),
            }),
        );
        assert_eq!(composer.catalog().len(), sample_courses().len());
        assert!(composer.catalog_error().is_some());
    }

    #[test]
    fn test_catalog_refresh_preserves_selection() {
        let mut composer = composer();
        composer.toggle_course("node-rest-apis").unwrap();
        composer.toggle_course("angular-fundamentals").unwrap();
        composer.toggle_course("git-workflow").unwrap();

        let refreshed: Vec<Course> = sample_courses()
            .into_iter()
            .filter(|c| c.id != "angular-fundamentals")
            .collect();
        let token = composer.begin_catalog_load();
        composer.finish_catalog_load(token, Ok(refreshed));

        assert_eq!(selected_ids(&composer), vec!["node-rest-apis", "git-workflow"]);
        assert_dense_orders(&composer);
    }

    fn course_with_duration(id: &str, duration: &str) -> Course {
        Course::new(id, id, "X", duration, Level::Beginner, "General")
    }

    fn preselected(id: &str, order: Option<u32>) -> Course {
        let mut course = course_with_duration(id, "1 hours");
        course.is_selected = true;
        course.order = order;
        course
    }

    #[test]
    fn test_duration_derivation_table() {
        let saturated = format!("{} weeks", u64::MAX.div_ceil(HOURS_PER_WEEK));
        let cases: Vec<(Vec<&str>, String)> = vec![
            (vec!["40 hours", "50 hours"], "3 weeks".to_string()),
            (vec!["20 hours"], "1 weeks".to_string()),
            (vec!["self-paced", "0 hours"], "0 weeks".to_string()),
            (vec!["18446744073709551615 hours", "1 hours"], saturated.clone()),
            (vec!["99999999999999999999999 hours"], saturated.clone()),
            (
                vec!["18446744073709551615 hours", "18446744073709551615 hours"],
                saturated,
            ),
        ];

        for (durations, expected) in cases {
            let ids: Vec<String> = (0..durations.len()).map(|i| format!("c{i}")).collect();
            let catalog: Vec<Course> = ids
                .iter()
                .zip(&durations)
                .map(|(id, duration)| course_with_duration(id, duration))
                .collect();
            let mut composer = RoadmapComposer::new(catalog);
            for id in &ids {
                composer.toggle_course(id).unwrap();
            }
            assert_eq!(composer.form().duration, expected, "durations {durations:?}");
        }
    }

    #[test]
    fn test_catalog_refresh_with_large_and_colliding_orders() {
        let cases: Vec<(Vec<&str>, Vec<Course>, Vec<&str>)> = vec![
            (
                vec!["a"],
                vec![
                    course_with_duration("a", "1 hours"),
                    preselected("b", Some(u32::MAX)),
                ],
                vec!["a", "b"],
            ),
            (
                vec![],
                vec![
                    preselected("x", Some(5)),
                    preselected("y", Some(5)),
                    preselected("z", Some(0)),
                ],
                vec!["z", "x", "y"],
            ),
            (
                vec!["a"],
                vec![
                    preselected("b", Some(0)),
                    course_with_duration("a", "1 hours"),
                    preselected("c", None),
                ],
                vec!["a", "b", "c"],
            ),
        ];

        for (before, incoming, expected) in cases {
            let initial = vec![
                course_with_duration("a", "1 hours"),
                course_with_duration("b", "1 hours"),
            ];
            let mut composer = RoadmapComposer::new(initial);
            for id in &before {
                composer.toggle_course(id).unwrap();
            }

            let token = composer.begin_catalog_load();
            let outcome = composer.finish_catalog_load(token, Ok(incoming));
            assert!(matches!(outcome, LoadOutcome::Applied { .. }));
            assert_eq!(selected_ids(&composer), expected);
            assert_dense_orders(&composer);
        }
    }

    #[tokio::test]
    async fn test_load_catalog_from_service() {
        let mut composer = RoadmapComposer::default();
        let outcome = composer
            .load_catalog(&crate::catalog::CatalogService::default())
            .await;
        assert_eq!(outcome, LoadOutcome::Applied { courses: sample_courses().len() });
        assert_eq!(composer.catalog(), sample_courses().as_slice());
    }
}
