//! Python bindings for tic-tac-shoot game logic
//!
//! Exposes the adapter operations to Python over numpy arrays, so a Python
//! search/self-play driver can run simulations against the Rust engine.
//! All functions are functional: they take a snapshot and return a new one,
//! never mutating their inputs.

use super::action::Action;
use super::board::BoardConfig;
use super::{encoding, notation, TicTacShootGame};
use crate::game_trait::BoardGame;
use numpy::{PyArray1, PyArray3, PyReadonlyArray3};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Python wrapper for [`BoardConfig`].
#[pyclass(name = "BoardConfig")]
#[derive(Clone)]
pub struct PyBoardConfig {
    pub(crate) inner: BoardConfig,
}

#[pymethods]
impl PyBoardConfig {
    /// Create a config for the canonical sliding variant.
    #[staticmethod]
    #[pyo3(signature = (n=3))]
    fn sliding(n: usize) -> PyResult<Self> {
        BoardConfig::sliding(n)
            .map(|inner| PyBoardConfig { inner })
            .map_err(PyValueError::new_err)
    }

    /// Create a config for the classic immediate-removal variant.
    #[staticmethod]
    #[pyo3(signature = (n=3))]
    fn classic(n: usize) -> PyResult<Self> {
        BoardConfig::classic(n)
            .map(|inner| PyBoardConfig { inner })
            .map_err(PyValueError::new_err)
    }

    #[getter]
    fn n(&self) -> usize {
        self.inner.n
    }

    #[getter]
    fn action_size(&self) -> usize {
        self.inner.action_size
    }

    #[getter]
    fn action_spin(&self) -> usize {
        self.inner.action_spin
    }

    #[getter]
    fn action_shoot(&self) -> usize {
        self.inner.action_shoot
    }

    #[getter]
    fn action_end_turn(&self) -> usize {
        self.inner.action_end_turn
    }

    #[getter]
    fn num_planes(&self) -> usize {
        self.inner.num_planes
    }

    fn __repr__(&self) -> String {
        format!("BoardConfig(n={}, variant={:?})", self.inner.n, self.inner.variant)
    }
}

/// Python wrapper for [`Action`].
#[pyclass(name = "Action")]
#[derive(Clone)]
pub struct PyAction {
    pub(crate) inner: Action,
}

#[pymethods]
impl PyAction {
    /// Create a Place action.
    #[staticmethod]
    fn place(rotation: u8, row: usize, col: usize) -> PyResult<Self> {
        if rotation >= 8 {
            return Err(PyValueError::new_err(format!(
                "Invalid rotation {} (expected 0..8)",
                rotation
            )));
        }
        Ok(PyAction {
            inner: Action::Place { rotation, row, col },
        })
    }

    /// Create a Spin action.
    #[staticmethod]
    fn spin() -> Self {
        PyAction { inner: Action::Spin }
    }

    /// Create a Shoot action.
    #[staticmethod]
    fn shoot() -> Self {
        PyAction { inner: Action::Shoot }
    }

    /// Create an EndTurn action.
    #[staticmethod]
    fn end_turn() -> Self {
        PyAction {
            inner: Action::EndTurn,
        }
    }

    /// Decode an action from its flat id.
    #[staticmethod]
    fn from_index(config: &PyBoardConfig, index: usize) -> PyResult<Self> {
        Action::from_index(index, &config.inner)
            .map(|inner| PyAction { inner })
            .map_err(PyValueError::new_err)
    }

    /// Encode this action as a flat id.
    fn to_index(&self, config: &PyBoardConfig) -> usize {
        self.inner.to_index(&config.inner)
    }

    fn __repr__(&self) -> String {
        match self.inner {
            Action::Place { rotation, row, col } => {
                format!("Action.Place(rotation={}, row={}, col={})", rotation, row, col)
            }
            Action::Spin => "Action.Spin".to_string(),
            Action::Shoot => "Action.Shoot".to_string(),
            Action::EndTurn => "Action.EndTurn".to_string(),
        }
    }

    fn __eq__(&self, other: &PyAction) -> bool {
        self.inner == other.inner
    }

    fn __hash__(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.inner.hash(&mut hasher);
        hasher.finish()
    }
}

/// Create the initial snapshot.
///
/// Returns:
///     (7, n, n) float32 array with the token pre-placed for player X
#[pyfunction]
pub fn initial_state(py: Python<'_>, config: &PyBoardConfig) -> PyResult<Py<PyArray3<f32>>> {
    let game = TicTacShootGame::with_config(config.inner.clone());
    Ok(PyArray3::from_array(py, &game.initial_state()).into())
}

/// Dense 0/1 legality vector for `player`.
///
/// Args:
///     snapshot: (7, n, n) array
///     player: +1 (O) or -1 (X)
#[pyfunction]
pub fn legal_action_mask(
    py: Python<'_>,
    config: &PyBoardConfig,
    snapshot: PyReadonlyArray3<f32>,
    player: i8,
) -> PyResult<Py<PyArray1<f32>>> {
    let game = TicTacShootGame::with_config(config.inner.clone());
    let mask = game
        .legal_action_mask(&snapshot.as_array(), player)
        .map_err(PyValueError::new_err)?;
    Ok(PyArray1::from_array(py, &mask).into())
}

/// Apply an action by flat id and return the successor snapshot plus the
/// player to move next (flips only on END_TURN).
#[pyfunction]
pub fn next_state(
    py: Python<'_>,
    config: &PyBoardConfig,
    snapshot: PyReadonlyArray3<f32>,
    player: i8,
    action: usize,
) -> PyResult<(Py<PyArray3<f32>>, i8)> {
    let game = TicTacShootGame::with_config(config.inner.clone());
    let (next, next_player) = game
        .next_state(&snapshot.as_array(), player, action)
        .map_err(PyValueError::new_err)?;
    Ok((PyArray3::from_array(py, &next).into(), next_player))
}

/// Terminal value from `player`'s perspective: +1 win, -1 loss, a small
/// draw signal past the stalemate cutoff, 0 while undecided.
#[pyfunction]
pub fn terminal_value(
    config: &PyBoardConfig,
    snapshot: PyReadonlyArray3<f32>,
    player: i8,
) -> PyResult<f32> {
    let game = TicTacShootGame::with_config(config.inner.clone());
    game.terminal_value(&snapshot.as_array(), player)
        .map_err(PyValueError::new_err)
}

/// Canonical snapshot for `player` (piece plane sign-flipped).
#[pyfunction]
pub fn canonicalize(
    py: Python<'_>,
    config: &PyBoardConfig,
    snapshot: PyReadonlyArray3<f32>,
    player: i8,
) -> PyResult<Py<PyArray3<f32>>> {
    let game = TicTacShootGame::with_config(config.inner.clone());
    let canonical = game
        .canonicalize_state(&snapshot.as_array(), player)
        .map_err(PyValueError::new_err)?;
    Ok(PyArray3::from_array(py, &canonical).into())
}

/// Render a snapshot as a human-readable board string.
#[pyfunction]
pub fn render(config: &PyBoardConfig, snapshot: PyReadonlyArray3<f32>) -> PyResult<String> {
    let state = encoding::decode_state(&snapshot.as_array(), &config.inner)
        .map_err(PyValueError::new_err)?;
    Ok(notation::render_state(&state, &config.inner))
}

/// Register all game logic functions with the Python module
pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(initial_state, m)?)?;
    m.add_function(wrap_pyfunction!(legal_action_mask, m)?)?;
    m.add_function(wrap_pyfunction!(next_state, m)?)?;
    m.add_function(wrap_pyfunction!(terminal_value, m)?)?;
    m.add_function(wrap_pyfunction!(canonicalize, m)?)?;
    m.add_function(wrap_pyfunction!(render, m)?)?;

    Ok(())
}
