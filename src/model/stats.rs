#[derive(Debug, Default)]
pub struct Stats {
    n_transaction_rows: usize,
    n_exported_rows: usize,
}

impl Stats {
    pub fn inc_transactions(&mut self) {
        self.n_transaction_rows += 1;
    }

    pub fn add_exported(&mut self, rows: usize) {
        self.n_exported_rows += rows;
    }

    pub fn transaction_rows(&self) -> usize {
        self.n_transaction_rows
    }

    pub fn exported_rows(&self) -> usize {
        self.n_exported_rows
    }

    pub fn pretty_print(&self) {
        println!("{self:#?}");
        println!();
    }
}
