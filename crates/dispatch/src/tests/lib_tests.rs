use std::cell::RefCell;

use super::*;

struct RecordingOpener {
    opened: RefCell<Vec<Url>>,
}

impl RecordingOpener {
    fn new() -> Self {
        Self {
            opened: RefCell::new(Vec::new()),
        }
    }
}

impl LinkOpener for &RecordingOpener {
    fn open_link(&self, url: &Url) -> Result<(), DispatchError> {
        self.opened.borrow_mut().push(url.clone());
        Ok(())
    }
}

struct FailingOpener;

impl LinkOpener for FailingOpener {
    fn open_link(&self, _url: &Url) -> Result<(), DispatchError> {
        Err(DispatchError::OpenLink(std::io::Error::other(
            "no share target",
        )))
    }
}

#[test]
fn share_link_targets_the_destination() {
    let url = share_link("201098662418", "Invoice #1").expect("url");

    assert_eq!(url.host_str(), Some("wa.me"));
    assert_eq!(url.path(), "/201098662418");
}

#[test]
fn share_link_round_trips_the_payload_through_the_query() {
    let payload = "Invoice #123456\nDate: 24/12/2024\n\nTotal: 699.97 EGP";
    let url = share_link("201098662418", payload).expect("url");

    let (key, value) = url.query_pairs().next().expect("text parameter");
    assert_eq!(key, "text");
    assert_eq!(value, payload);
    assert!(!url.as_str().contains('\n'));
}

#[test]
fn share_sink_hands_the_built_link_to_the_opener() {
    let opener = RecordingOpener::new();
    let sink = ShareLinkSink::new("201098662418", &opener);

    sink.dispatch("Invoice #7").expect("dispatch");

    let opened = opener.opened.borrow();
    assert_eq!(opened.len(), 1);
    assert!(opened[0].as_str().starts_with("https://wa.me/201098662418?text="));
}

#[test]
fn share_sink_surfaces_opener_failure() {
    let sink = ShareLinkSink::new("201098662418", FailingOpener);

    let err = sink.dispatch("Invoice #7").expect_err("open failure");
    assert!(matches!(err, DispatchError::OpenLink(_)));
}

#[test]
fn file_export_writes_the_payload_verbatim() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("invoice.txt");
    let sink = FileExportSink::new(&path);

    let payload = "Invoice #42\n\nTotal: 0.00 EGP";
    sink.dispatch(payload).expect("export");

    assert_eq!(std::fs::read_to_string(&path).expect("read back"), payload);
}

#[test]
fn file_export_failure_names_the_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("missing").join("invoice.txt");
    let sink = FileExportSink::new(&path);

    let err = sink.dispatch("payload").expect_err("export failure");
    assert!(matches!(err, DispatchError::Export { .. }));
    assert!(err.to_string().contains("invoice.txt"));
}
