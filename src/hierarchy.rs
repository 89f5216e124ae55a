//! Tier-aware hierarchy navigation.
//!
//! Every operation works on the label sequence, then sends the result back
//! through permissive validation and the strict probe. The strict tier of
//! a result is therefore decided afresh rather than inherited: dropping a
//! label can make a name strict, and adding one can make it permissive only.

use crate::domain::{Domain, Form};
use crate::error::{DomainError, FormatError, SubdomainError};
use crate::grammar::Grammar;
use crate::label::Label;
use crate::literal::AddressLiteralParser;
use crate::sequence::LabelSequence;
use crate::tier::Tier;
use crate::validator::LabelValidator;

impl<S, P, L> Grammar<S, P, L>
where
    S: LabelValidator,
    P: LabelValidator,
    L: AddressLiteralParser,
{
    /// Returns the top-level label as extracted by the strictest grammar
    /// `domain` satisfies.
    #[must_use]
    pub fn tld<'a>(&self, domain: &'a Domain) -> Option<&'a Label> {
        match domain.form() {
            Form::Labels {
                labels,
                strict: true,
            } => self.strict.extract_tld(labels),
            Form::Labels { labels, .. } => self.permissive.extract_tld(labels),
            Form::Literal(_) => None,
        }
    }

    /// Returns the second-level label as extracted by the strictest grammar
    /// `domain` satisfies.
    #[must_use]
    pub fn sld<'a>(&self, domain: &'a Domain) -> Option<&'a Label> {
        match domain.form() {
            Form::Labels {
                labels,
                strict: true,
            } => self.strict.extract_sld(labels),
            Form::Labels { labels, .. } => self.permissive.extract_sld(labels),
            Form::Literal(_) => None,
        }
    }

    /// Prepends `labels` to `domain`, leftmost first.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::CannotCreateSubdomain` if `domain` is an
    /// address literal, `labels` is empty, a new label is invalid, or the
    /// extended name is invalid.
    pub fn adding_subdomain<I, T>(&self, domain: &Domain, labels: I) -> Result<Domain, DomainError>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let cannot = |reason| DomainError::CannotCreateSubdomain {
            domain: domain.name().to_string(),
            reason,
        };

        let base = domain
            .labels()
            .ok_or_else(|| cannot(SubdomainError::AddressLiteral))?;

        let mut added = Vec::new();
        for (index, label) in labels.into_iter().enumerate() {
            let label = label.as_ref();
            self.permissive.validate_label(label).map_err(|error| {
                cannot(SubdomainError::InvalidName(FormatError::InvalidLabel {
                    index,
                    label: label.to_string(),
                    error,
                }))
            })?;
            added.push(Label::new_unchecked(label));
        }
        if added.is_empty() {
            return Err(cannot(SubdomainError::NoLabels));
        }

        let extended = base.prepend(added).to_string();
        let labels = self
            .permissive_labels(&extended)
            .map_err(|reason| cannot(SubdomainError::InvalidName(reason)))?;
        Ok(self.domain_from_labels(labels))
    }

    /// Removes the leftmost label of `domain`.
    ///
    /// Returns `Ok(None)` for a single-label domain.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ConversionFailure` if `domain` is an address
    /// literal or the shortened name fails re-validation.
    pub fn parent(&self, domain: &Domain) -> Result<Option<Domain>, DomainError> {
        let labels = navigable(domain, "parent")?;
        labels
            .parent()
            .map(|parent| self.revalidate(domain.tier(), &parent, "parent"))
            .transpose()
    }

    /// Reduces `domain` to its last two labels.
    ///
    /// Returns `Ok(None)` with fewer than two labels.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ConversionFailure` if `domain` is an address
    /// literal or the shortened name fails re-validation.
    pub fn root(&self, domain: &Domain) -> Result<Option<Domain>, DomainError> {
        let labels = navigable(domain, "root")?;
        labels
            .root()
            .map(|root| self.revalidate(domain.tier(), &root, "root"))
            .transpose()
    }

    /// Runs a derived sequence back through construction.
    fn revalidate(
        &self,
        from: Tier,
        labels: &LabelSequence,
        operation: &'static str,
    ) -> Result<Domain, DomainError> {
        let name = labels.to_string();
        let labels = self.permissive_labels(&name).map_err(|reason| {
            tracing::debug!(%name, %reason, operation, "derived name failed re-validation");
            DomainError::ConversionFailure {
                from,
                to: operation,
            }
        })?;
        Ok(self.domain_from_labels(labels))
    }
}

fn navigable<'a>(domain: &'a Domain, operation: &'static str) -> Result<&'a LabelSequence, DomainError> {
    domain.labels().ok_or(DomainError::ConversionFailure {
        from: Tier::Transport,
        to: operation,
    })
}
