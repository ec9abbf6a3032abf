use orderdesk_types::{Amount, Order, OrderDate, OrderDraft, OrderId, OrderStatus};

use crate::error::{Error, Result};

/// Status values offered by the form's pick field, in cycle order.
pub const STATUS_CHOICES: [&str; 3] = ["pending", "confirmed", "cancelled"];

/// The form's two modes. Edit remembers which order the submit targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(OrderId),
}

/// The six editable fields, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Client,
    Amount,
    Date,
    Company,
    Salesperson,
    Status,
}

impl FormField {
    pub const ALL: [FormField; 6] = [
        FormField::Client,
        FormField::Amount,
        FormField::Date,
        FormField::Company,
        FormField::Salesperson,
        FormField::Status,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Client => "client",
            FormField::Amount => "amount",
            FormField::Date => "date",
            FormField::Company => "company",
            FormField::Salesperson => "salesperson",
            FormField::Status => "status",
        }
    }

    fn index(&self) -> usize {
        Self::ALL
            .iter()
            .position(|field| field == self)
            .unwrap_or(0)
    }

    fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Create/Edit form state: the mode, one text buffer per field, and the
/// focused field.
///
/// Status is a pick field cycled through [`STATUS_CHOICES`] rather than
/// typed. Dates are typed in display form (`DD/MM/YYYY`); canonical input
/// is accepted too and everything is normalized on submit.
#[derive(Debug, Clone)]
pub struct OrderForm {
    mode: FormMode,
    focus: FormField,
    client: String,
    amount: String,
    date: String,
    company: String,
    salesperson: String,
    status: String,
}

impl OrderForm {
    pub fn new() -> Self {
        Self {
            mode: FormMode::Create,
            focus: FormField::Client,
            client: String::new(),
            amount: String::new(),
            date: String::new(),
            company: String::new(),
            salesperson: String::new(),
            status: String::new(),
        }
    }

    /// Clears every field and returns to Create mode.
    pub fn open_for_create(&mut self) {
        *self = Self::new();
    }

    /// Populates every field from the given order and switches to Edit
    /// mode targeting it. The amount buffer holds the exact stored value,
    /// not the two-decimal rendering.
    pub fn open_for_edit(&mut self, order: &Order) {
        self.mode = FormMode::Edit(order.id.clone());
        self.focus = FormField::Client;
        self.client = order.client.clone();
        self.amount = order.amount.value().to_string();
        self.date = order.date.display();
        self.company = order.company.clone();
        self.salesperson = order.salesperson.clone().unwrap_or_default();
        self.status = order
            .status
            .as_ref()
            .map(|status| status.as_str().to_string())
            .unwrap_or_default();
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn is_edit(&self) -> bool {
        matches!(self.mode, FormMode::Edit(_))
    }

    pub fn focus(&self) -> FormField {
        self.focus
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Client => &self.client,
            FormField::Amount => &self.amount,
            FormField::Date => &self.date,
            FormField::Company => &self.company,
            FormField::Salesperson => &self.salesperson,
            FormField::Status => &self.status,
        }
    }

    /// Appends to the focused buffer. The status pick field ignores typed
    /// characters; it only moves through `cycle_status`.
    pub fn push_char(&mut self, ch: char) {
        if ch.is_control() {
            return;
        }
        match self.focus {
            FormField::Status => {}
            field => self.buffer_mut(field).push(ch),
        }
    }

    pub fn backspace(&mut self) {
        match self.focus {
            FormField::Status => self.status.clear(),
            field => {
                self.buffer_mut(field).pop();
            }
        }
    }

    /// Advances the status pick field: empty or unknown goes to the first
    /// choice, then the cycle wraps.
    pub fn cycle_status(&mut self) {
        let next = match STATUS_CHOICES
            .iter()
            .position(|choice| *choice == self.status)
        {
            Some(idx) => STATUS_CHOICES[(idx + 1) % STATUS_CHOICES.len()],
            None => STATUS_CHOICES[0],
        };
        self.status = next.to_string();
    }

    /// Validates every field and yields the draft, date normalized to
    /// canonical form. Pure: the caller dispatches the network call, and
    /// on failure the buffers stay as typed so the user can retry.
    pub fn submit(&self) -> Result<(FormMode, OrderDraft)> {
        let client = required(&self.client, "client")?;
        let amount_raw = required(&self.amount, "amount")?;
        let date_raw = required(&self.date, "date")?;
        let company = required(&self.company, "company")?;
        let salesperson = required(&self.salesperson, "salesperson")?;
        let status_raw = required(&self.status, "status")?;

        let amount =
            Amount::parse(&amount_raw).map_err(|_| Error::InvalidAmount(amount_raw.clone()))?;
        let date = OrderDate::parse(&date_raw).map_err(|_| Error::InvalidDate(date_raw.clone()))?;

        Ok((
            self.mode.clone(),
            OrderDraft {
                client,
                amount,
                date,
                company,
                salesperson,
                status: OrderStatus::parse(status_raw),
            },
        ))
    }

    fn buffer_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Client => &mut self.client,
            FormField::Amount => &mut self.amount,
            FormField::Date => &mut self.date,
            FormField::Company => &mut self.company,
            FormField::Salesperson => &mut self.salesperson,
            FormField::Status => &mut self.status,
        }
    }
}

impl Default for OrderForm {
    fn default() -> Self {
        Self::new()
    }
}

fn required(value: &str, label: &'static str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::MissingField(label));
    }
    Ok(trimmed.to_string())
}
