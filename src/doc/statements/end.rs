/*!
# `END`

## Purpose
Halt the program.

## Remarks
Running off the last line halts as well; `END` is for stopping in the
middle. `STOP` does the same thing.

*/
