use listsync::{diff, Edit, Record};

fn records(ids: &str) -> Vec<Record> {
    ids.chars().map(|c| Record::with_id(c.to_string())).collect()
}

fn replay(old: &[Record], edits: &[Edit]) -> Vec<Record> {
    let mut list = old.to_vec();
    for edit in edits {
        edit.apply_to(&mut list);
    }
    list
}

#[test]
fn identical_lists_diff_to_nothing() {
    for ids in ["", "a", "abc", "abcdefghij"] {
        let list = records(ids);
        assert!(diff(&list, &list).unwrap().is_empty());
    }
}

#[test]
fn empty_old_is_all_inserts_in_ascending_order() {
    let new = records("abcde");
    let edits = diff(&[], &new).unwrap();
    assert_eq!(edits.len(), new.len());
    for (i, edit) in edits.iter().enumerate() {
        assert_eq!(
            edit,
            &Edit::Insert {
                index: i,
                record: new[i].clone()
            }
        );
    }
}

#[test]
fn empty_new_removes_every_element() {
    let old = records("abcde");
    let edits = diff(&old, &[]).unwrap();
    assert_eq!(edits.len(), old.len());
    let mut removed: Vec<&str> = edits
        .iter()
        .map(|edit| match edit {
            Edit::Remove { record, .. } => record.id(),
            Edit::Insert { .. } => panic!("expected only removals"),
        })
        .collect();
    removed.sort_unstable();
    assert_eq!(removed, ["a", "b", "c", "d", "e"]);
    assert!(replay(&old, &edits).is_empty());
}

#[test]
fn replaying_the_script_yields_the_new_list() {
    let pairs = [
        ("", "abc"),
        ("abc", ""),
        ("abc", "abc"),
        ("abc", "cab"),
        ("abcdef", "fedcba"),
        ("abc", "xaybzc"),
        ("xaybzc", "abc"),
        ("abcdefghij", "acegi"),
        ("acegi", "abcdefghij"),
        ("abcd", "efgh"),
    ];
    for (old, new) in pairs {
        let (old, new) = (records(old), records(new));
        let edits = diff(&old, &new).unwrap();
        assert_eq!(replay(&old, &edits), new);
    }
}

#[test]
fn shared_elements_are_not_churned() {
    // Deleting every other element must not touch the survivors.
    let edits = diff(&records("abcdefghij"), &records("bdfhj")).unwrap();
    assert_eq!(edits.len(), 5);
    assert!(edits
        .iter()
        .all(|edit| matches!(edit, Edit::Remove { .. })));
}

#[test]
fn delete_one_of_three() {
    let edits = diff(&records("abc"), &records("ac")).unwrap();
    assert_eq!(
        edits,
        [Edit::Remove {
            index: 1,
            record: Record::with_id("b")
        }]
    );
}

#[test]
fn append_inserts_at_the_end() {
    let edits = diff(&records("ab"), &records("abd")).unwrap();
    assert_eq!(
        edits,
        [Edit::Insert {
            index: 2,
            record: Record::with_id("d")
        }]
    );
}

#[test]
fn script_length_matches_the_lcs_bound() {
    // "abc" vs "acb" share an LCS of length 2, so four edits total is
    // one churned pair too many.
    let edits = diff(&records("abc"), &records("acb")).unwrap();
    assert_eq!(edits.len(), 2);
}
