use fibbench::fib::{fib_linked, fib_local, DEFAULT_INDEX};
use fibbench::report::{JsonReport, TickReport};
use fibbench::{Function, Harness};

use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

/// A writer that can be handed to a boxed report while the test keeps a
/// handle to read the output back.
#[derive(Clone, Default)]
struct SharedBuf(Rc<RefCell<Vec<u8>>>);

impl SharedBuf {
    fn contents(&self) -> String {
        String::from_utf8(self.0.borrow().clone()).unwrap()
    }
}

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn bench_both(harness: &mut Harness) {
    harness
        .bench("linked", Function::new(|n| fib_linked(n)))
        .unwrap();
    harness.bench("local", Function::new(fib_local)).unwrap();
    harness.compare().unwrap();
}

#[test]
fn default_run_emits_exactly_four_lines() {
    let buf = SharedBuf::default();
    let mut harness = Harness::default().with_report(Box::new(TickReport::new(buf.clone())));
    bench_both(&mut harness);

    // The harness defaults to the original's index without being told.
    for record in harness.records() {
        assert_eq!(record.id.index, DEFAULT_INDEX);
    }

    let output = buf.contents();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 4);

    // Lines 1 and 3 are results, lines 2 and 4 tick counts; all of them
    // decimal unsigned integers with no labels or units.
    assert_eq!(lines[0], "1346269");
    assert_eq!(lines[2], "1346269");
    for ticks in &[lines[1], lines[3]] {
        ticks.parse::<u64>().unwrap();
    }
    assert!(output.ends_with('\n'));
}

#[test]
fn implementations_agree_bit_for_bit() {
    for n in 0..=25 {
        assert_eq!(fib_linked(n), fib_local(n), "diverged at index {}", n);
    }
}

#[test]
fn records_hold_one_measurement_per_sample() {
    let mut harness = Harness::default()
        .with_report(Box::new(TickReport::new(Vec::new())))
        .fib_index(15)
        .sample_count(5);
    bench_both(&mut harness);

    let records = harness.records();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].id.name, "linked");
    assert_eq!(records[1].id.name, "local");

    for record in records {
        assert_eq!(record.ticks.len(), 5);
        assert_eq!(record.result, fib_local(15));
        assert_eq!(record.unit, "ns");
        assert!(record.mean.is_finite() && record.mean >= 0.0);
        assert!(record.std_dev.is_some());
    }
}

#[test]
fn json_output_is_one_valid_object_per_routine() {
    let buf = SharedBuf::default();
    let mut harness = Harness::default()
        .with_report(Box::new(JsonReport::new(buf.clone())))
        .fib_index(15);
    bench_both(&mut harness);

    let output = buf.contents();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 2);

    for (line, name) in lines.iter().zip(&["linked", "local"]) {
        let value: serde_json::Value = serde_json::from_str(line).unwrap();
        assert_eq!(value["id"]["name"], *name);
        assert_eq!(value["id"]["index"], 15);
        assert_eq!(value["result"], fib_local(15));
        assert_eq!(value["unit"], "ns");
        assert_eq!(value["ticks"].as_array().unwrap().len(), 1);
        assert_eq!(value["total"], value["ticks"][0]);
    }
}
