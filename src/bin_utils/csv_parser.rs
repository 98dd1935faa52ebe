use std::io::Read;

use crate::{
    account::{AccountId, Amount},
    command::{OperationArgs, OperationKind},
    customer::CustomerId,
};
use csv::{Position, StringRecord, StringRecordsIntoIter, Trim};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Operation {
    pub op: OperationKind,
    pub customer: Option<CustomerId>,
    pub account: Option<AccountId>,
    pub to: Option<AccountId>,
    pub amount: Option<Amount>,
    pub kind: Option<String>,
    pub name: Option<String>,
    pub address: Option<String>,
}

impl Operation {
    pub fn into_parts(self) -> (OperationKind, OperationArgs) {
        (
            self.op,
            OperationArgs {
                customer: self.customer,
                account: self.account,
                to: self.to,
                amount: self.amount,
                kind: self.kind,
                name: self.name,
                address: self.address,
            },
        )
    }
}

/// Parses an operation script in CSV format.
/// Every item carries the line its record starts on.
pub struct CsvOperationParser<R> {
    headers: StringRecord,
    records: StringRecordsIntoIter<R>,
}

impl<R> CsvOperationParser<R>
where
    R: Read,
{
    pub fn new(source: R) -> csv::Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(source);
        let headers = reader.headers()?.clone();

        Ok(Self {
            headers,
            records: reader.into_records(),
        })
    }
}

impl<R> Iterator for CsvOperationParser<R>
where
    R: Read,
{
    type Item = (u64, csv::Result<Operation>);

    fn next(&mut self) -> Option<Self::Item> {
        let record = match self.records.next()? {
            Ok(record) => record,
            Err(err) => {
                let line = err.position().map_or(0, Position::line);
                return Some((line, Err(err)));
            }
        };
        let line = record.position().map_or(0, Position::line);
        Some((line, record.deserialize(Some(&self.headers))))
    }
}
