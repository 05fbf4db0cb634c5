use crate::{
    entities::{AddressColumn, Coordinates, ErrorPolicy, Summary},
    gateways::geocode::GeoCodingGateway,
    observer::{Event, Observer},
    Error, Result,
};
use csv::{ReaderBuilder, StringRecord, Terminator, WriterBuilder};
use std::{
    fs::File,
    io::{Read, Write},
    path::Path,
};

pub const DEFAULT_LATITUDE_COLUMN: &str = "latitude";
pub const DEFAULT_LONGITUDE_COLUMN: &str = "longitude";
pub const DEFAULT_DELIMITER: u8 = b',';
pub const DEFAULT_PROGRESS_INTERVAL: u64 = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub address_column: AddressColumn,
    pub latitude_column: String,
    pub longitude_column: String,
    pub delimiter: u8,
    /// Notify the progress every n rows (`0` = never).
    pub progress_interval: u64,
    pub on_resolve_error: ErrorPolicy,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            address_column: AddressColumn::default(),
            latitude_column: DEFAULT_LATITUDE_COLUMN.to_string(),
            longitude_column: DEFAULT_LONGITUDE_COLUMN.to_string(),
            delimiter: DEFAULT_DELIMITER,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
            on_resolve_error: ErrorPolicy::default(),
        }
    }
}

/// Appends the coordinates of an address column to every row of a table.
pub struct Pipeline<G, O> {
    settings: Settings,
    gateway: G,
    observer: O,
}

impl<G, O> Pipeline<G, O>
where
    G: GeoCodingGateway,
    O: Observer,
{
    pub fn new(settings: Settings, gateway: G, observer: O) -> Self {
        Self {
            settings,
            gateway,
            observer,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Look up the coordinates of the best match for `address`.
    pub fn resolve(&self, address: &str) -> Result<Coordinates> {
        self.observer.notify(Event::Resolving { address });
        let candidates = self
            .gateway
            .forward(address)
            .map_err(|source| Error::Resolve {
                address: address.to_string(),
                source,
            })?;
        let Some(&candidate) = candidates.first() else {
            self.observer.notify(Event::Unresolved { address });
            return Ok(Coordinates::absent());
        };
        self.observer.notify(Event::Resolved { address, candidate });
        Ok(candidate.into())
    }

    /// Enrich the file at `input` and write the result to `output`.
    ///
    /// An existing output file is truncated.
    pub fn run<I, P>(&self, input: I, output: P) -> Result<Summary>
    where
        I: AsRef<Path>,
        P: AsRef<Path>,
    {
        let (input, output) = (input.as_ref(), output.as_ref());
        let reader = File::open(input).map_err(|source| Error::Open {
            path: input.to_path_buf(),
            source,
        })?;
        let writer = File::create(output).map_err(|source| Error::Create {
            path: output.to_path_buf(),
            source,
        })?;
        self.observer.notify(Event::Started { input, output });
        self.enrich(reader, writer)
    }

    pub fn enrich<R, W>(&self, reader: R, writer: W) -> Result<Summary>
    where
        R: Read,
        W: Write,
    {
        let Settings {
            address_column,
            latitude_column,
            longitude_column,
            delimiter,
            ..
        } = &self.settings;

        let mut reader = ReaderBuilder::new()
            .delimiter(*delimiter)
            .has_headers(true)
            .from_reader(reader);
        let mut writer = WriterBuilder::new()
            .delimiter(*delimiter)
            .terminator(Terminator::CRLF)
            .from_writer(writer);

        let mut header = reader.headers()?.clone();
        if header.is_empty() {
            return Err(Error::MissingHeader);
        }
        let address_idx = address_index(address_column, &header)?;
        header.push_field(latitude_column);
        header.push_field(longitude_column);
        writer.write_record(&header)?;

        let mut summary = Summary::default();
        for (row, record) in reader.records().enumerate() {
            let row = row as u64;
            let mut record = record?;
            if self.is_progress_row(row) {
                self.observer.notify(Event::Progress { row });
            }
            // Every record has the length of the header.
            let address = &record[address_idx];
            let coordinates = self.resolve_row(row, address, &mut summary)?;
            let [lat, lng] = coordinates.to_fields();
            record.push_field(&lat);
            record.push_field(&lng);
            writer.write_record(&record)?;
            summary.rows += 1;
        }
        writer.flush()?;

        self.observer.notify(Event::Finished { summary });
        Ok(summary)
    }

    fn resolve_row(&self, row: u64, address: &str, summary: &mut Summary) -> Result<Coordinates> {
        match self.resolve(address) {
            Ok(coordinates) => {
                if coordinates.is_absent() {
                    summary.unresolved += 1;
                } else {
                    summary.resolved += 1;
                }
                Ok(coordinates)
            }
            Err(Error::Resolve { address, source })
                if self.settings.on_resolve_error == ErrorPolicy::Skip =>
            {
                self.observer.notify(Event::Failed {
                    row,
                    address: &address,
                    error: &source,
                });
                summary.failed += 1;
                Ok(Coordinates::absent())
            }
            Err(err) => Err(err),
        }
    }

    fn is_progress_row(&self, row: u64) -> bool {
        let interval = self.settings.progress_interval;
        interval > 0 && row % interval == 0
    }
}

fn address_index(column: &AddressColumn, header: &StringRecord) -> Result<usize> {
    match column {
        AddressColumn::Index(index) => {
            if *index < header.len() {
                Ok(*index)
            } else {
                Err(Error::ColumnOutOfRange {
                    index: *index,
                    len: header.len(),
                })
            }
        }
        AddressColumn::Name(name) => header
            .iter()
            .position(|field| field.trim() == name.trim())
            .ok_or_else(|| Error::UnknownColumn(name.clone())),
    }
}
