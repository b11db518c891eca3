mod common;

use columns_field::{ColumnsField, Field, FieldChannel, FieldInfo, SubscriptionScope};
use columns_model::{Column, Item};
use common::{item, Recorder};
use pretty_assertions::assert_eq;
use std::sync::Arc;

fn column(ids: &[&str]) -> Column {
    Column::new(Default::default(), ids.iter().map(|id| item(id)).collect())
}

// ── Whole-array subscribers ──────────────────────────────────────

#[test]
fn whole_subscriber_sees_every_change() {
    let channel = FieldChannel::new();
    let recorder = Recorder::<Vec<Column>>::new();
    let sub = channel.attach_whole(recorder.callback());
    assert_eq!(sub.scope(), SubscriptionScope::Whole);

    channel.publish(&vec![column(&["a"])]);
    channel.publish(&vec![column(&["a"]), column(&["b"])]);
    assert_eq!(recorder.calls(), 2);
    assert_eq!(recorder.last().unwrap().len(), 2);
}

// ── Slice subscribers ────────────────────────────────────────────

#[test]
fn slice_subscriber_only_sees_its_projection_change() {
    let channel = FieldChannel::new();
    let recorder = Recorder::<Vec<Item>>::new();
    let sub = channel.attach_slice(0, vec![], recorder.callback());
    assert_eq!(sub.scope(), SubscriptionScope::Slice(0));

    channel.publish(&vec![column(&["a"])]);
    assert_eq!(recorder.calls(), 1);
    assert_eq!(recorder.last().unwrap(), vec![item("a")]);

    // Only index 1 changes.
    channel.publish(&vec![column(&["a"]), column(&["b"])]);
    assert_eq!(recorder.calls(), 1);
}

#[test]
fn slice_past_end_projects_to_empty() {
    let channel = FieldChannel::new();
    let recorder = Recorder::<Vec<Item>>::new();
    let _sub = channel.attach_slice(3, vec![item("stale")], recorder.callback());

    channel.publish(&vec![column(&["a"])]);
    assert_eq!(recorder.calls(), 1);
    assert_eq!(recorder.last().unwrap(), Vec::<Item>::new());
}

// ── Detaching ────────────────────────────────────────────────────

#[test]
fn unsubscribe_detaches_only_that_registration() {
    let channel = FieldChannel::new();
    let first = Recorder::<Vec<Item>>::new();
    let second = Recorder::<Vec<Item>>::new();
    let sub_first = channel.attach_slice(0, vec![], first.callback());
    let _sub_second = channel.attach_slice(1, vec![], second.callback());
    assert_eq!(channel.len(), 2);

    sub_first.unsubscribe();
    assert_eq!(channel.len(), 1);

    channel.publish(&vec![column(&["a"]), column(&["b"])]);
    assert_eq!(first.calls(), 0);
    assert_eq!(second.calls(), 1);
}

#[test]
fn dropping_guard_detaches() {
    let channel = FieldChannel::new();
    {
        let _sub = channel.attach_whole(|_| {});
        assert_eq!(channel.len(), 1);
    }
    assert!(channel.is_empty());
}

#[test]
fn guard_outliving_channel_is_harmless() {
    let sub = {
        let channel = FieldChannel::new();
        channel.attach_whole(|_| {})
    };
    sub.unsubscribe();
}

// ── Re-entrancy ──────────────────────────────────────────────────

#[test]
fn listener_reads_value_it_is_notified_about() {
    let field = Arc::new(ColumnsField::empty(FieldInfo::new("columns")));
    let seen = Recorder::<Vec<Column>>::new();
    let record = seen.callback();
    let reader = Arc::clone(&field);
    let _sub = field.on_value_changed(Box::new(move |_| {
        record(&reader.get_value().unwrap_or_default());
    }));

    field.set_value(vec![column(&["a"])]).unwrap();
    assert_eq!(seen.last().unwrap(), vec![column(&["a"])]);
}

#[test]
fn listener_may_write_back_without_deadlock() {
    let field = Arc::new(ColumnsField::empty(FieldInfo::new("columns")));
    let writer = Arc::clone(&field);
    let _sub = field.on_value_changed(Box::new(move |columns| {
        if columns.len() == 1 {
            let mut next = columns.clone();
            next.push(Column::default());
            writer.set_value(next).unwrap();
        }
    }));

    field.set_value(vec![column(&["a"])]).unwrap();
    assert_eq!(field.len(), 2);
}

#[test]
fn write_back_does_not_leave_slice_subscribers_stale() {
    let field = Arc::new(ColumnsField::empty(FieldInfo::new("columns")));
    let writer = Arc::clone(&field);
    let _a = field.channel().attach_slice(0, Vec::new(), move |items: &Vec<Item>| {
        if items.len() == 1 {
            writer.set_value(vec![column(&["x", "y"])]).unwrap();
        }
    });
    let later = Recorder::<Vec<Item>>::new();
    let _b = field.channel().attach_slice(0, Vec::new(), later.callback());

    field.apply_external(Some(vec![column(&["x"])]));

    assert_eq!(field.column(0).unwrap().items, vec![item("x"), item("y")]);
    assert_eq!(later.last().unwrap(), vec![item("x"), item("y")]);
    assert_eq!(later.calls(), 1);
}

#[test]
fn write_back_does_not_leave_whole_subscribers_stale() {
    let field = Arc::new(ColumnsField::empty(FieldInfo::new("columns")));
    let writer = Arc::clone(&field);
    let _a = field.on_value_changed(Box::new(move |columns| {
        if columns.len() == 1 {
            let mut next = columns.clone();
            next.push(column(&["b"]));
            writer.set_value(next).unwrap();
        }
    }));
    let later = Recorder::<Vec<Column>>::new();
    let _b = field.on_value_changed(Box::new(later.callback()));

    field.set_value(vec![column(&["a"])]).unwrap();

    assert_eq!(later.last().unwrap(), field.get_value().unwrap());
    assert_eq!(later.calls(), 1);
}

#[test]
fn versions_advance_with_each_stored_value() {
    let field = ColumnsField::empty(FieldInfo::new("columns"));
    let start = field.channel().version();
    field.set_value(vec![column(&["a"])]).unwrap();
    field.set_value(vec![column(&["a"])]).unwrap();
    assert_eq!(field.channel().version(), start + 1);
}
