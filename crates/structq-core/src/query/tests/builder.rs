use super::*;

#[test]
fn root_group_keeps_encounter_order() {
    let record = MixedWhere {
        top: "t".into(),
        either: EitherWhere {
            name: "foo".into(),
            age: 12,
        },
        tail: "z".into(),
    };
    let group = build(&record);

    assert_eq!(group.combinator(), Combinator::And);
    assert_eq!(group.nodes().len(), 3);
    assert!(matches!(group.nodes()[0], Node::Leaf(_)));
    assert!(matches!(&group.nodes()[1], Node::Group(g) if g.combinator() == Combinator::Or));
    assert!(matches!(group.nodes()[2], Node::Leaf(_)));

    assert_eq!(group.leaves().count(), 2);
    assert_eq!(group.groups().count(), 1);
}

#[test]
fn nested_records_are_and_groups() {
    #[derive(Default, Filter)]
    struct Parents {
        father: String,
        mother: String,
    }

    #[derive(Default, Filter)]
    struct Outer {
        #[filter(nested)]
        parents: Parents,
    }

    let record = Outer {
        parents: Parents {
            father: "foo".into(),
            mother: "bar".into(),
        },
    };
    let group = build(&record);
    let child = group.groups().next().unwrap();

    assert_eq!(child.combinator(), Combinator::And);
    assert_eq!(child.leaves().count(), 2);
}

#[test]
fn optional_records_read_absent_when_none() {
    #[derive(Default, Filter)]
    struct Outer {
        name: String,
        #[filter(embed)]
        either: Option<EitherWhere>,
    }

    let group = build(&Outer {
        name: "foo".into(),
        either: None,
    });
    assert_eq!(group.groups().count(), 0);

    let group = build(&Outer {
        name: "foo".into(),
        either: Some(EitherWhere {
            name: "bar".into(),
            age: 0,
        }),
    });
    assert_eq!(group.groups().count(), 1);
}

#[test]
fn empty_child_groups_are_kept_in_the_tree() {
    let group = build(&MixedWhere::default());

    assert_eq!(group.groups().count(), 1);
    assert!(group.is_empty());
}

#[test]
fn zero_values_are_skipped() {
    let group = build(&UserWhere::default());

    assert!(group.nodes().is_empty());
    assert!(group.is_empty());
}

#[test]
fn zero_values_compile_when_skipping_is_off() {
    let group = Compiler::new()
        .skip_zero_values(false)
        .build(&UserWhere::default());

    let values: Vec<_> = group.leaves().flat_map(|leaf| leaf.values()).collect();
    assert_eq!(values, [&text(""), &Value::Int(0)]);
}

#[test]
fn empty_lists_are_skipped_regardless_of_policy() {
    #[derive(Default, Filter)]
    struct Ids {
        id: Vec<i32>,
    }

    let group = Compiler::new().skip_zero_values(false).build(&Ids::default());

    assert!(group.is_empty());
}

#[test]
fn some_zero_is_present() {
    #[derive(Filter)]
    struct Status {
        status: Option<i32>,
        label: Option<String>,
    }

    let group = build(&Status {
        status: Some(0),
        label: None,
    });
    let leaves: Vec<_> = group.leaves().collect();

    assert_eq!(leaves.len(), 1);
    assert_eq!(leaves[0].expr(), "\"status\" = ?");
    assert_eq!(leaves[0].values(), [Value::Int(0)]);
}

#[test]
fn suppressed_fields_contribute_nothing() {
    #[derive(Filter)]
    struct Where {
        name: String,
        #[filter(op = "-")]
        age: i32,
        father: Option<String>,
    }

    let group = build(&Where {
        name: String::new(),
        age: 12,
        father: None,
    });

    assert!(group.is_empty());
}

#[test]
fn default_operators_follow_value_shape() {
    #[derive(Filter)]
    struct Where {
        name: String,
        id: Vec<i64>,
        birth: Vec<time::PrimitiveDateTime>,
    }

    let group = build(&Where {
        name: "foo".into(),
        id: vec![1, 2],
        birth: vec![
            datetime!(2001-01-02 0:00),
            datetime!(2002-01-02 0:00),
        ],
    });
    let ops: Vec<_> = group.leaves().map(ConditionLeaf::operator).collect();

    assert_eq!(ops, [Operator::Eq, Operator::In, Operator::Between]);
}

#[test]
fn temporal_values_in_an_untyped_list_select_between() {
    let record = FixtureRecord::builder("Window")
        .field(
            FieldModel::new("window", FieldType::scalar(FieldKind::Other).list()),
            Value::from_list([date!(2020 - 01 - 01), date!(2020 - 12 - 31)]),
        )
        .build();
    let group = build(&record);
    let leaf = group.leaves().next().unwrap();

    assert_eq!(leaf.operator(), Operator::Between);
    assert_eq!(leaf.values().len(), 2);
}

#[test]
fn between_needs_exactly_two_values() {
    #[derive(Filter)]
    struct Where {
        birth: Vec<time::Date>,
    }

    let group = build(&Where {
        birth: vec![date!(2001 - 01 - 02)],
    });
    assert!(group.is_empty());

    let group = build(&Where {
        birth: vec![
            date!(2001 - 01 - 02),
            date!(2002 - 01 - 02),
            date!(2003 - 01 - 02),
        ],
    });
    assert!(group.is_empty());
}

#[test]
fn null_tests_follow_the_flag() {
    #[derive(Filter)]
    struct Where {
        #[filter(op = "null")]
        deleted_at: bool,
        #[filter(op = "null")]
        created_at: Option<bool>,
        #[filter(op = "not null")]
        updated_at: Option<bool>,
    }

    let group = build(&Where {
        deleted_at: true,
        created_at: Some(false),
        updated_at: Some(false),
    });
    let leaves: Vec<_> = group.leaves().collect();

    assert_eq!(leaves[0].operator(), Operator::Null);
    assert_eq!(leaves[1].operator(), Operator::NotNull);
    assert_eq!(leaves[1].expr(), "\"created_at\" IS NOT NULL");
    assert_eq!(leaves[2].operator(), Operator::Null);
    assert!(leaves.iter().all(|leaf| leaf.values().is_empty()));
}

#[test]
fn values_are_replicated_per_atom() {
    let group = build(&SearchWhere {
        term: "tom".into(),
        age: 0,
    });
    let leaf = group.leaves().next().unwrap();

    assert_eq!(leaf.atoms(), 3);
    assert_eq!(
        leaf.expr(),
        "\"a\" LIKE ? AND (\"b\" LIKE ? OR \"c\" LIKE ?)"
    );
    assert_eq!(leaf.values(), [text("%tom%"), text("%tom%"), text("%tom%")]);
}

#[test]
fn like_wraps_unless_a_wildcard_is_present() {
    assert_eq!(like_pattern(text("tom")), text("%tom%"));
    assert_eq!(like_pattern(text("tom%")), text("tom%"));
    assert_eq!(like_pattern(text("tom\\%")), text("%tom\\%%"));
    assert_eq!(like_pattern(text("tom\\\\%")), text("tom\\\\%"));
    assert_eq!(like_pattern(Value::Int(5)), text("%5%"));
}

#[test]
fn field_tag_overrides_the_column() {
    #[derive(Filter)]
    struct Where {
        #[filter(field = "u.name")]
        name: String,
        #[filter(field = "  ")]
        age: i32,
    }

    let group = build(&Where {
        name: "foo".into(),
        age: 3,
    });
    let exprs: Vec<_> = group.leaves().map(ConditionLeaf::expr).collect();

    assert_eq!(exprs, ["\"u\".\"name\" = ?", "\"age\" = ?"]);
}

#[test]
fn malformed_tags_drop_the_field() {
    let record = FixtureRecord::builder("Broken")
        .field(
            FieldModel::new("name", FieldType::scalar(FieldKind::Text)).op("sometimes"),
            "foo",
        )
        .field(
            FieldModel::new("age", FieldType::scalar(FieldKind::Int)).column("a&&b"),
            12,
        )
        .field(
            FieldModel::new("raw", FieldType::scalar(FieldKind::Int)).op("no marker here ="),
            1,
        )
        .value("kept", "yes")
        .build();
    let group = build(&record);
    let exprs: Vec<_> = group.leaves().map(ConditionLeaf::expr).collect();

    assert_eq!(exprs, ["\"kept\" = ?"]);
}

#[test]
fn raw_templates_are_used_verbatim() {
    #[derive(Filter)]
    struct Where {
        #[filter(op = "type_id in ?")]
        type_id: Vec<i32>,
        #[filter(op = "lower(name) = lower(?)")]
        name: String,
    }

    let group = build(&Where {
        type_id: vec![1, 2, 3],
        name: "Foo".into(),
    });
    let exprs: Vec<_> = group.leaves().map(ConditionLeaf::expr).collect();

    assert_eq!(exprs, ["type_id in ?", "lower(name) = lower(?)"]);
}

#[test]
fn raw_template_with_or_keeps_its_precedence() {
    #[derive(Filter)]
    struct Where {
        status: String,
        #[filter(op = "owner_id = ? OR owner_id IS NULL")]
        owner: i32,
    }

    let compiled = compile(&Where {
        status: "open".into(),
        owner: 7,
    });
    assert_eq!(
        compiled.where_clause,
        "\"status\" = ? AND (owner_id = ? OR owner_id IS NULL)"
    );
    assert_eq!(compiled.args.into_vec(), [text("open"), Value::Int(7)]);

    let compiled = compile(&Where {
        status: String::new(),
        owner: 7,
    });
    assert_eq!(compiled.where_clause, "owner_id = ? OR owner_id IS NULL");
}

#[test]
fn absent_and_out_of_range_slots_read_absent() {
    let record = FixtureRecord::builder("Sparse")
        .absent(FieldModel::new("gone", FieldType::scalar(FieldKind::Text)))
        .present(FieldModel::new("zero", FieldType::scalar(FieldKind::Int)), 0)
        .build();

    assert!(record.slot(0).is_absent());
    assert!(!record.slot(1).is_absent());
    assert!(record.slot(7).is_absent());
    assert_eq!(build(&record).leaves().count(), 1);
}

//
// pagination
//

#[test]
fn page_and_size_set_the_root() {
    let group = build(&Paging { page: 2, size: 10 });

    assert_eq!(group.page(), PageSpec::new(2, 10));
    assert!(group.is_empty());
}

#[test]
fn untagged_page_and_size_names_paginate() {
    #[derive(Filter)]
    struct Where {
        page: u32,
        size: u32,
        name: String,
    }

    let group = build(&Where {
        page: 3,
        size: 5,
        name: "foo".into(),
    });

    assert_eq!(group.page(), PageSpec::new(3, 5));
    assert_eq!(group.leaves().count(), 1);
}

#[test]
fn page_tag_on_text_is_dropped() {
    #[derive(Filter)]
    struct Where {
        #[filter(op = "page")]
        page: String,
    }

    let group = build(&Where { page: "2".into() });

    assert!(!group.page().is_set());
    assert!(group.is_empty());
}

#[test]
fn pagination_bubbles_up_first_wins() {
    #[derive(Filter)]
    struct Outer {
        #[filter(op = "page")]
        page: i32,
        #[filter(nested)]
        paging: Paging,
    }

    let group = build(&Outer {
        page: 3,
        paging: Paging { page: 2, size: 10 },
    });

    assert_eq!(group.page(), PageSpec::new(3, 10));
    assert_eq!(group.groups().next().unwrap().page(), PageSpec::default());
}

#[test]
fn negative_page_counts_as_unset() {
    #[derive(Filter)]
    struct Outer {
        #[filter(op = "page")]
        page: i32,
        #[filter(nested)]
        paging: Paging,
    }

    let group = build(&Outer {
        page: -1,
        paging: Paging { page: 2, size: 10 },
    });

    assert_eq!(group.page(), PageSpec::new(2, 10));
}

//
// ordering
//

#[test]
fn order_flags_select_direction() {
    #[derive(Filter)]
    struct Order {
        #[filter(op = "asc", field = "name")]
        name_order: bool,
        #[filter(op = "desc")]
        age: bool,
        #[filter(op = "asc")]
        birth: Option<bool>,
        #[filter(op = "desc", field = "father, mother")]
        names: bool,
    }

    let group = build(&Order {
        name_order: true,
        age: true,
        birth: Some(false),
        names: true,
    });
    let order: Vec<_> = group
        .order()
        .iter()
        .map(|directive| (directive.columns().to_vec(), directive.direction()))
        .collect();

    assert_eq!(
        order,
        [
            (vec!["\"name\"".to_string()], OrderDirection::Asc),
            (vec!["\"age\"".to_string()], OrderDirection::Desc),
            (vec!["\"birth\"".to_string()], OrderDirection::Desc),
            (
                vec!["\"father\"".to_string(), "\"mother\"".to_string()],
                OrderDirection::Desc
            ),
        ]
    );
    assert!(group.is_empty());
}

#[test]
fn order_tag_on_non_bool_is_dropped() {
    #[derive(Filter)]
    struct Order {
        #[filter(op = "asc")]
        name: String,
    }

    let group = build(&Order { name: "x".into() });

    assert!(group.order().is_empty());
    assert!(group.is_empty());
}

#[test]
fn nested_order_is_appended_to_the_root() {
    #[derive(Filter)]
    struct Inner {
        #[filter(op = "desc")]
        created_at: bool,
    }

    #[derive(Filter)]
    struct Outer {
        #[filter(op = "asc")]
        name: bool,
        #[filter(embed)]
        inner: Inner,
    }

    let group = build(&Outer {
        name: true,
        inner: Inner { created_at: true },
    });

    assert_eq!(group.order().len(), 2);
    assert!(group.order()[0].is_ascending());
    assert!(group.groups().next().unwrap().order().is_empty());
}

#[test]
fn mysql_quotes_order_columns() {
    #[derive(Filter)]
    struct Order {
        #[filter(op = "desc", field = "u.created_at")]
        newest: bool,
    }

    let group = Compiler::new()
        .with_dialect(MySql)
        .build(&Order { newest: true });

    assert_eq!(group.order()[0].columns(), ["`u`.`created_at`"]);
}

#[test]
fn empty_records_hold_no_subrecords() {
    let record = FixtureRecord::builder("Outer")
        .record(record_field("inner").nested(), FixtureRecord::builder("Inner").build())
        .build();

    assert!(build(&record).is_empty());
}
