//! Sample - Fixed Rows Shown by the Counter Page Table

/// A single display row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataItem {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    pub status: &'static str,
    pub date: &'static str,
}

const SAMPLE_ROWS: [DataItem; 5] = [
    DataItem {
        id: 1,
        name: "Item 1",
        description: "Description 1",
        status: "Active",
        date: "2024-06-01",
    },
    DataItem {
        id: 2,
        name: "Item 2",
        description: "Description 2",
        status: "Pending",
        date: "2024-06-02",
    },
    DataItem {
        id: 3,
        name: "Item 3",
        description: "Description 3",
        status: "Completed",
        date: "2024-06-03",
    },
    DataItem {
        id: 4,
        name: "Item 4",
        description: "Description 4",
        status: "Active",
        date: "2024-06-04",
    },
    DataItem {
        id: 5,
        name: "Item 5",
        description: "Description 5",
        status: "Inactive",
        date: "2024-06-05",
    },
];

/// The five hard-coded rows. There is no mutation path.
pub fn sample_rows() -> Vec<DataItem> {
    SAMPLE_ROWS.to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_rows_are_fixed() {
        let rows = sample_rows();
        assert_eq!(rows.len(), 5);
        assert_eq!(
            rows.iter().map(|r| r.id).collect::<Vec<_>>(),
            vec![1, 2, 3, 4, 5]
        );
        assert_eq!(rows[2].status, "Completed");
        assert_eq!(rows[4].status, "Inactive");
        assert_eq!(rows[4].date, "2024-06-05");
        assert_eq!(sample_rows(), rows);
    }
}
