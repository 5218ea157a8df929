use log::debug;

use crate::{
    io::LoadedDocument,
    types::{ArticleDocument, SeedRecord, SourceEntry},
};

impl From<&SourceEntry> for SeedRecord {
    fn from(entry: &SourceEntry) -> Self {
        Self {
            account_id: entry.compte().oid(),
            mnem: entry.mnem().to_string(),
            case_cerfa: entry.compte().case().to_string(),
        }
    }
}

/// Projects every entry of a document into a [`SeedRecord`], keeping file order.
pub(crate) fn flatten_document(document: &ArticleDocument) -> Vec<SeedRecord> {
    document
        .entries()
        .iter()
        .map(SeedRecord::from)
        .inspect(|record| {
            debug!(
                "Seeding {} {:?} case {:?}",
                record.account_id(),
                record.mnem(),
                record.case_cerfa()
            )
        })
        .collect()
}

/// Concatenates the records of every loaded document, in load order.
///
/// Records are not deduplicated; an article present in both files appears twice.
pub(crate) fn flatten_documents<'a, I>(documents: I) -> Vec<SeedRecord>
where
    I: IntoIterator<Item = &'a LoadedDocument>,
{
    let mut records = Vec::new();
    for loaded in documents {
        let flattened = flatten_document(&loaded.document);
        debug!(
            "{} {} entries from {}",
            flattened.len(),
            loaded.kind,
            loaded.path.display()
        );
        records.extend(flattened);
    }
    records
}
