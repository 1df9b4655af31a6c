//! Lebenszyklus der externen Karten-Bibliothek.
//!
//! Die Bibliothek ist ein prozessweiter Seiteneffekt. Statt eines freien
//! "ist das Script schon geladen"-Flags gibt es hier eine explizite,
//! idempotente Zustandsmaschine: einmal anfordern, Ready-Signal,
//! kontrollierter Abbau. Der Host startet den eigentlichen Ladevorgang
//! und meldet das Ergebnis zurück.

/// Ladezustand der Karten-Bibliothek.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ProviderPhase {
    /// Noch nicht angefordert
    #[default]
    Idle,
    /// Ladevorgang angestoßen, Ready-Signal steht aus
    Acquiring,
    /// Bibliothek einsatzbereit
    Ready,
    /// Laden fehlgeschlagen (mit Meldung für die Fehleranzeige)
    Failed(String),
}

/// Zustandsmaschine für die Script-Akquise.
#[derive(Debug, Clone, Default)]
pub struct ProviderRuntime {
    phase: ProviderPhase,
}

impl ProviderRuntime {
    /// Erstellt eine Runtime im Zustand `Idle`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fordert die Bibliothek an.
    ///
    /// Gibt `true` zurück, wenn der Host den Ladevorgang tatsächlich
    /// starten muss. Bei laufender oder abgeschlossener Akquise ist der
    /// Aufruf ein No-op; nach einem Fehlschlag ist eine erneute Akquise
    /// erlaubt.
    pub fn begin_acquire(&mut self) -> bool {
        match self.phase {
            ProviderPhase::Idle | ProviderPhase::Failed(_) => {
                log::info!("Karten-Bibliothek wird angefordert");
                self.phase = ProviderPhase::Acquiring;
                true
            }
            ProviderPhase::Acquiring | ProviderPhase::Ready => false,
        }
    }

    /// Meldet die Bibliothek als einsatzbereit.
    /// Nur aus `Acquiring` gültig; sonst wird das Signal ignoriert.
    pub fn ready(&mut self) {
        if self.phase == ProviderPhase::Acquiring {
            log::info!("Karten-Bibliothek einsatzbereit");
            self.phase = ProviderPhase::Ready;
        } else {
            log::warn!("Ready-Signal im Zustand {:?} ignoriert", self.phase);
        }
    }

    /// Meldet den Ladevorgang als fehlgeschlagen.
    /// Nur aus `Acquiring` gültig; sonst wird das Signal ignoriert.
    pub fn fail(&mut self, message: impl Into<String>) {
        if self.phase == ProviderPhase::Acquiring {
            let message = message.into();
            log::warn!("Karten-Bibliothek fehlgeschlagen: {}", message);
            self.phase = ProviderPhase::Failed(message);
        } else {
            log::warn!("Fehler-Signal im Zustand {:?} ignoriert", self.phase);
        }
    }

    /// Baut die Bibliothek kontrolliert ab und kehrt nach `Idle` zurück.
    pub fn shutdown(&mut self) {
        if self.phase != ProviderPhase::Idle {
            log::info!("Karten-Bibliothek abgebaut");
        }
        self.phase = ProviderPhase::Idle;
    }

    /// Gibt `true` zurück, wenn die Bibliothek einsatzbereit ist.
    pub fn is_ready(&self) -> bool {
        self.phase == ProviderPhase::Ready
    }

    /// Aktueller Ladezustand.
    pub fn phase(&self) -> &ProviderPhase {
        &self.phase
    }

    /// Fehlermeldung des letzten Ladevorgangs, falls vorhanden.
    pub fn failure_message(&self) -> Option<&str> {
        match &self.phase {
            ProviderPhase::Failed(message) => Some(message),
            _ => None,
        }
    }
}
