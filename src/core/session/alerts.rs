/// The single alert slot. A newly raised alert replaces whatever is showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Alert {
    /// Injected transient failure, with the message drawn for it.
    Error { message: String },
    CreditExhausted,
    LowCredits,
    PurchaseSucceeded,
    ChatLimitReached,
}

impl Alert {
    pub fn title(&self) -> &'static str {
        match self {
            Alert::Error { .. } => "An error occurred",
            Alert::CreditExhausted => "AliveGPT limit reached, usage will reset at 12:00pm",
            Alert::LowCredits => "You're almost out of credits!",
            Alert::PurchaseSucceeded => "Usage updated",
            Alert::ChatLimitReached => "You have reached your chat limit",
        }
    }

    pub fn body(&self) -> &str {
        match self {
            Alert::Error { message } => message,
            Alert::CreditExhausted => {
                "To continue talking to AliveGPT increase your usage for this chat with 10 credits or upgrade your subscription for more usage + more intelligent AI"
            }
            Alert::LowCredits => {
                "To continue talking to AliveGPT increase your usage for this chat with 10 credits or upgrade your subscription for more usage & a more advanced AI"
            }
            Alert::PurchaseSucceeded => {
                "Your purchase was successful! You can now carry on interacting with AliveGPT like before!"
            }
            Alert::ChatLimitReached => "This chat has ended start a new chat",
        }
    }

    /// Alerts that offer the purchase / upgrade buttons.
    pub fn offers_purchase(&self) -> bool {
        matches!(self, Alert::CreditExhausted | Alert::LowCredits)
    }

    /// Alerts that show the current balance.
    pub fn shows_balance(&self) -> bool {
        matches!(
            self,
            Alert::CreditExhausted | Alert::LowCredits | Alert::PurchaseSucceeded
        )
    }
}
