/*
 * Copyright (c) 2019 Frank Fischer <frank-fischer@shadow-soft.de>
 *
 * This program is free software: you can redistribute it and/or
 * modify it under the terms of the GNU General Public License as
 * published by the Free Software Foundation, either version 3 of the
 * License, or (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful, but
 * WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
 * General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see  <http://www.gnu.org/licenses/>
 */

mod binheap;
pub use self::binheap::BinHeap;

/// A priority queue with a decrease-key operation.
///
/// Entries are `(key, value)` pairs ordered by value. `push` hands out
/// a handle for its entry which can later be passed to `decrease_key`,
/// so a search can lower the priority of a queued vertex when a better
/// path to it is found instead of queueing it twice.
pub trait ItemPriQueue<K, V> {
    /// Handle for an entry in the queue.
    ///
    /// A handle stays valid until its entry is popped or the queue is
    /// cleared.
    type Item;

    /// Return `true` iff the queue contains no entry.
    fn is_empty(&self) -> bool;

    /// Remove all entries from the queue.
    fn clear(&mut self);

    /// Push the entry with given `key` and `value` onto the queue and
    /// return a handle referencing it.
    fn push(&mut self, key: K, value: V) -> Self::Item;

    /// Decrease the value of some entry in the queue.
    ///
    /// Returns `true` if the new value is smaller than the old one,
    /// otherwise the queue is unchanged.
    fn decrease_key(&mut self, item: &mut Self::Item, value: V) -> bool;

    /// Remove and return the entry with the smallest value, or `None`
    /// if the queue is empty.
    fn pop_min(&mut self) -> Option<(K, V)>;

    /// Return the value currently associated with a queued entry.
    fn value(&self, item: &Self::Item) -> &V;
}
