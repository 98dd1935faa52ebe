use std::str::from_utf8;

use bank_ledger::bin_utils::{ScriptError, Service};

const TEST_FILE: &str = include_str!("operations.csv");

#[test]
fn process_operations() {
    let mut output = Vec::new();
    let service = Service {
        input: TEST_FILE.as_bytes(),
        output: &mut output,
        error_printer: Box::new(|line, err| match err {
            ScriptError::CommandErr(err) => panic!("Unexpected error at line {line}: {err}"),
            ScriptError::LedgerErr(err) => {
                // rejected operations are part of the fixture
                eprintln!("Rejected at line {line}: {err}")
            }
        }),
    };
    service.run().unwrap();
    // accounts are kept in id order, so the statement is deterministic
    let lines: Vec<&str> = from_utf8(&output).unwrap().lines().collect();
    assert_eq!(
        lines,
        vec![
            "account,customer,type,balance",
            "1,1,Savings,800",
            "2,1,Checking,700",
            "3,2,Savings,1500",
        ]
    );
}
